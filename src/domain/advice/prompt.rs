//! System and user prompt construction

use super::{AdviceRequest, CompatibilityRequest, PlanRequest, TroubleshootRequest};

const PLAN_SYSTEM_INSTRUCTION: &str = "You are an expert Smart Home Architect. \
Generate a comprehensive shopping list and setup guide.
Format output in Markdown.
For product recommendations, create Amazon search links like this: \
[Product Name](https://www.amazon.com/s?k=Product+Name+Smart+Home).";

const COMPATIBILITY_SYSTEM_INSTRUCTION: &str = "You are a Smart Home Compatibility Engineer.
Start with \"YES\", \"NO\", or \"REQUIRES BRIDGE\" in bold. \
Explain the protocols (Zigbee, Z-Wave, Thread, Matter, WiFi) and how to connect the devices.
If they are incompatible, suggest a bridge or hub as a workaround.";

const TROUBLESHOOT_SYSTEM_INSTRUCTION: &str = "You are a Technical Support Agent for smart home devices. \
Provide step-by-step troubleshooting.
Use Markdown bolding for key steps. If hardware might be broken, suggest checking the warranty.";

/// System instruction plus user prompt sent to an upstream provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl PromptPair {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

impl AdviceRequest {
    /// Builds the fixed system instruction and interpolated user prompt
    pub fn prompt(&self) -> PromptPair {
        match self {
            Self::Plan(plan) => PromptPair::new(PLAN_SYSTEM_INSTRUCTION, plan_prompt(plan)),
            Self::Compatibility(compat) => {
                PromptPair::new(COMPATIBILITY_SYSTEM_INSTRUCTION, compatibility_prompt(compat))
            }
            Self::Troubleshoot(fix) => {
                PromptPair::new(TROUBLESHOOT_SYSTEM_INSTRUCTION, troubleshoot_prompt(fix))
            }
        }
    }
}

fn plan_prompt(plan: &PlanRequest) -> String {
    format!(
        "Design a smart home for a \"{}\" using \"{}\".\nBudget: {}. Priorities: {}. Skill Level: {}.",
        plan.home_type,
        plan.ecosystem,
        plan.budget,
        plan.priorities.join(", "),
        plan.skill_level,
    )
}

fn compatibility_prompt(compat: &CompatibilityRequest) -> String {
    format!(
        "Check compatibility between: {} and {}.",
        compat.device_a, compat.device_b
    )
}

fn troubleshoot_prompt(fix: &TroubleshootRequest) -> String {
    format!("Issue: \"{}\". How do I fix it?", fix.issue)
}
