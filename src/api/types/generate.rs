use serde::{Deserialize, Serialize};

use crate::domain::{AdviceRequest, DomainError};

/// Body of `POST /api/generate`.
///
/// `type` is kept as a plain string so an unknown or missing value is
/// reported as an invalid request type rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl GenerateRequest {
    pub fn into_advice_request(self) -> Result<AdviceRequest, DomainError> {
        AdviceRequest::from_parts(&self.kind, self.data)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: String,
}
