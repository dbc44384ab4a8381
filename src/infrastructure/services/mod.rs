//! Infrastructure services

mod relay_service;

pub use relay_service::{RelayResponse, RelayService};
