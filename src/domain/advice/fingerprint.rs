//! Deterministic cache keys for advice requests

use serde::Serialize;

use super::AdviceRequest;
use crate::domain::DomainError;

#[derive(Serialize)]
struct DevicePair<'a> {
    a: &'a str,
    b: &'a str,
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl AdviceRequest {
    /// Returns `<prefix>_<canonical json>` for this request.
    ///
    /// Device names and issue text are trimmed and lower-cased first so that
    /// lookups ignore case and surrounding whitespace.
    pub fn fingerprint(&self) -> Result<String, DomainError> {
        let body = match self {
            Self::Plan(plan) => serde_json::to_string(plan),
            Self::Compatibility(compat) => {
                let a = normalize(&compat.device_a);
                let b = normalize(&compat.device_b);
                serde_json::to_string(&DevicePair { a: &a, b: &b })
            }
            Self::Troubleshoot(fix) => serde_json::to_string(&normalize(&fix.issue)),
        }
        .map_err(|e| DomainError::internal(format!("Failed to fingerprint request: {}", e)))?;

        Ok(format!("{}_{}", self.kind().cache_prefix(), body))
    }
}
