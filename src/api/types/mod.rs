//! Wire types shared by the HTTP handlers

pub mod error;
pub mod generate;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use generate::{GenerateRequest, GenerateResponse};
pub use json::Json;
