//! Advice request validation

use std::fmt;

use super::{AdviceRequest, CompatibilityRequest, PlanRequest, TroubleshootRequest};
use crate::domain::DomainError;

/// Advice request validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum AdviceValidationError {
    /// A required text field is empty or whitespace only
    BlankField { field: &'static str },
    /// A plan request has no usable priority
    NoPriorities,
}

impl fmt::Display for AdviceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankField { field } => write!(f, "Field '{}' cannot be empty", field),
            Self::NoPriorities => write!(f, "Please select at least one priority"),
        }
    }
}

impl std::error::Error for AdviceValidationError {}

impl From<AdviceValidationError> for DomainError {
    fn from(err: AdviceValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Checks that every required field of the request carries a value
pub fn validate_advice_request(request: &AdviceRequest) -> Result<(), AdviceValidationError> {
    match request {
        AdviceRequest::Plan(plan) => validate_plan(plan),
        AdviceRequest::Compatibility(compat) => validate_compatibility(compat),
        AdviceRequest::Troubleshoot(fix) => validate_troubleshoot(fix),
    }
}

fn validate_plan(plan: &PlanRequest) -> Result<(), AdviceValidationError> {
    require("homeType", &plan.home_type)?;
    require("ecosystem", &plan.ecosystem)?;
    require("budget", &plan.budget)?;
    require("skillLevel", &plan.skill_level)?;

    if !plan.priorities.iter().any(|p| !p.trim().is_empty()) {
        return Err(AdviceValidationError::NoPriorities);
    }

    Ok(())
}

fn validate_compatibility(compat: &CompatibilityRequest) -> Result<(), AdviceValidationError> {
    require("deviceA", &compat.device_a)?;
    require("deviceB", &compat.device_b)
}

fn validate_troubleshoot(fix: &TroubleshootRequest) -> Result<(), AdviceValidationError> {
    require("issue", &fix.issue)
}

fn require(field: &'static str, value: &str) -> Result<(), AdviceValidationError> {
    if value.trim().is_empty() {
        return Err(AdviceValidationError::BlankField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with_priorities(priorities: Vec<&str>) -> AdviceRequest {
        AdviceRequest::plan(
            "Studio Apartment",
            "Google Home",
            "$300 - $800 (Solid Start)",
            priorities.into_iter().map(String::from).collect(),
            "Intermediate",
        )
    }

    #[test]
    fn test_valid_plan() {
        assert!(validate_advice_request(&plan_with_priorities(vec!["Security"])).is_ok());
    }

    #[test]
    fn test_plan_requires_priority() {
        assert_eq!(
            validate_advice_request(&plan_with_priorities(vec![])),
            Err(AdviceValidationError::NoPriorities)
        );
        assert_eq!(
            validate_advice_request(&plan_with_priorities(vec!["  "])),
            Err(AdviceValidationError::NoPriorities)
        );
    }

    #[test]
    fn test_plan_requires_home_type() {
        let request = AdviceRequest::plan("", "Amazon Alexa", "$2000+", vec!["Climate".into()], "Expert");

        assert_eq!(
            validate_advice_request(&request),
            Err(AdviceValidationError::BlankField { field: "homeType" })
        );
    }

    #[test]
    fn test_compatibility_requires_both_devices() {
        let request = AdviceRequest::compatibility("Nest Thermostat", "   ");

        assert_eq!(
            validate_advice_request(&request),
            Err(AdviceValidationError::BlankField { field: "deviceB" })
        );
    }

    #[test]
    fn test_troubleshoot_requires_issue() {
        let err = validate_advice_request(&AdviceRequest::troubleshoot("")).unwrap_err();
        assert_eq!(err.to_string(), "Field 'issue' cannot be empty");
    }

    #[test]
    fn test_conversion_to_domain_error() {
        let err: DomainError = AdviceValidationError::NoPriorities.into();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
