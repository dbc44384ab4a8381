//! CLI module for the smart-home advisor
//!
//! - `serve`: run the relay server
//! - `plan`, `compat`, `troubleshoot`: ask the relay through the cached client
//! - `cache-clear`: wipe the client response cache

pub mod ask;
pub mod serve;

use clap::{Parser, Subcommand};

/// Smart-home advisor - LLM-backed setup plans, compatibility checks and troubleshooting
#[derive(Parser)]
#[command(name = "smarthome-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the relay server
    Serve,

    /// Design a smart home for a home profile
    Plan(ask::PlanArgs),

    /// Check whether two devices work together
    Compat(ask::CompatArgs),

    /// Get step-by-step help for an issue
    Troubleshoot(ask::TroubleshootArgs),

    /// Remove every cached answer
    CacheClear(ask::ClientArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from([
            "smarthome-advisor",
            "plan",
            "--home-type",
            "Apartment",
            "--ecosystem",
            "Apple Home",
            "--budget",
            "$500",
            "--priority",
            "Security",
            "--priority",
            "Lighting",
            "--skill-level",
            "Beginner",
            "--no-cache",
        ])
        .unwrap();

        match cli.command {
            Command::Plan(args) => {
                assert_eq!(args.priorities, vec!["Security", "Lighting"]);
                assert!(args.client.no_cache);
                assert!(args.client.endpoint.is_none());
            }
            _ => panic!("expected plan"),
        }
    }

    #[test]
    fn test_parse_compat_with_endpoint() {
        let cli = Cli::try_parse_from([
            "smarthome-advisor",
            "compat",
            "Philips Hue",
            "Echo Dot",
            "--endpoint",
            "http://relay.local:9000",
        ])
        .unwrap();

        match cli.command {
            Command::Compat(args) => {
                assert_eq!(args.device_a, "Philips Hue");
                assert_eq!(args.device_b, "Echo Dot");
                assert_eq!(args.client.endpoint.as_deref(), Some("http://relay.local:9000"));
            }
            _ => panic!("expected compat"),
        }
    }

    #[test]
    fn test_plan_requires_priority() {
        let result = Cli::try_parse_from([
            "smarthome-advisor",
            "plan",
            "--home-type",
            "House",
            "--ecosystem",
            "Alexa",
            "--budget",
            "$1000",
            "--skill-level",
            "Expert",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_cache_clear() {
        let cli = Cli::try_parse_from(["smarthome-advisor", "cache-clear"]).unwrap();
        assert!(matches!(cli.command, Command::CacheClear(_)));
    }
}
