//! Advice request types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The three kinds of advice a visitor can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Plan,
    Compatibility,
    Troubleshoot,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [Self::Plan, Self::Compatibility, Self::Troubleshoot];

    /// Wire name used in the `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Compatibility => "compatibility",
            Self::Troubleshoot => "troubleshoot",
        }
    }

    /// Prefix used when fingerprinting requests of this kind
    pub fn cache_prefix(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Compatibility => "comp",
            Self::Troubleshoot => "fix",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plan" => Ok(Self::Plan),
            "compatibility" => Ok(Self::Compatibility),
            "troubleshoot" => Ok(Self::Troubleshoot),
            _ => Err(DomainError::validation("Invalid request type")),
        }
    }
}

/// Home profile used to generate a shopping plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub home_type: String,
    pub ecosystem: String,
    pub budget: String,
    pub priorities: Vec<String>,
    pub skill_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    pub device_a: String,
    pub device_b: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroubleshootRequest {
    pub issue: String,
}

/// A typed advice request.
///
/// Serializes to the relay wire format `{"type": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum AdviceRequest {
    Plan(PlanRequest),
    Compatibility(CompatibilityRequest),
    Troubleshoot(TroubleshootRequest),
}

impl AdviceRequest {
    pub fn plan(
        home_type: impl Into<String>,
        ecosystem: impl Into<String>,
        budget: impl Into<String>,
        priorities: Vec<String>,
        skill_level: impl Into<String>,
    ) -> Self {
        Self::Plan(PlanRequest {
            home_type: home_type.into(),
            ecosystem: ecosystem.into(),
            budget: budget.into(),
            priorities,
            skill_level: skill_level.into(),
        })
    }

    pub fn compatibility(device_a: impl Into<String>, device_b: impl Into<String>) -> Self {
        Self::Compatibility(CompatibilityRequest {
            device_a: device_a.into(),
            device_b: device_b.into(),
        })
    }

    pub fn troubleshoot(issue: impl Into<String>) -> Self {
        Self::Troubleshoot(TroubleshootRequest {
            issue: issue.into(),
        })
    }

    /// Builds a request from an untyped `type` tag and `data` payload.
    ///
    /// Unknown tags and payloads that do not match the tag's shape are
    /// validation errors.
    pub fn from_parts(kind: &str, data: serde_json::Value) -> Result<Self, DomainError> {
        let kind: RequestKind = kind.parse()?;

        let parsed = match kind {
            RequestKind::Plan => serde_json::from_value(data).map(Self::Plan),
            RequestKind::Compatibility => serde_json::from_value(data).map(Self::Compatibility),
            RequestKind::Troubleshoot => serde_json::from_value(data).map(Self::Troubleshoot),
        };

        parsed.map_err(|e| DomainError::validation(format!("Invalid {} data: {}", kind, e)))
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Plan(_) => RequestKind::Plan,
            Self::Compatibility(_) => RequestKind::Compatibility,
            Self::Troubleshoot(_) => RequestKind::Troubleshoot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let request = AdviceRequest::compatibility("Nest Thermostat", "Apple HomeKit");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "compatibility",
                "data": { "deviceA": "Nest Thermostat", "deviceB": "Apple HomeKit" }
            })
        );
    }

    #[test]
    fn test_plan_wire_format_uses_camel_case() {
        let request = AdviceRequest::plan(
            "Studio Apartment",
            "Google Home",
            "Under $300 (Essentials)",
            vec!["Lighting".to_string()],
            "Beginner",
        );
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["type"], "plan");
        assert_eq!(value["data"]["homeType"], "Studio Apartment");
        assert_eq!(value["data"]["skillLevel"], "Beginner");
        assert_eq!(value["data"]["priorities"], json!(["Lighting"]));
    }

    #[test]
    fn test_from_parts() {
        let request =
            AdviceRequest::from_parts("troubleshoot", json!({ "issue": "Hub offline" })).unwrap();

        assert_eq!(request, AdviceRequest::troubleshoot("Hub offline"));
        assert_eq!(request.kind(), RequestKind::Troubleshoot);
    }

    #[test]
    fn test_from_parts_unknown_type() {
        let err = AdviceRequest::from_parts("weather", json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid request type");
    }

    #[test]
    fn test_from_parts_shape_mismatch() {
        let err = AdviceRequest::from_parts("compatibility", json!({ "deviceA": "Hue" }))
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(err.to_string().contains("deviceB"));
    }

    #[test]
    fn test_request_kind_round_trip_names() {
        for kind in RequestKind::ALL {
            assert_eq!(kind.as_str().parse::<RequestKind>().unwrap(), kind);
        }
    }
}
