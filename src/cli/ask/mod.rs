//! Client commands - ask the relay through the cached advice client

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::AdviceRequest;
use crate::infrastructure::logging::{self, LogOutput};

/// Options shared by every client command
#[derive(Args, Debug, Clone, Default)]
pub struct ClientArgs {
    /// Relay base URL (defaults to `client.endpoint`)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Skip the cache lookup and always ask the relay
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[arg(long)]
    pub home_type: String,

    #[arg(long)]
    pub ecosystem: String,

    #[arg(long)]
    pub budget: String,

    /// Repeat for each priority
    #[arg(long = "priority", required = true)]
    pub priorities: Vec<String>,

    #[arg(long)]
    pub skill_level: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CompatArgs {
    pub device_a: String,

    pub device_b: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TroubleshootArgs {
    pub issue: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

pub async fn plan(args: PlanArgs) -> anyhow::Result<()> {
    let request = AdviceRequest::plan(
        args.home_type,
        args.ecosystem,
        args.budget,
        args.priorities,
        args.skill_level,
    );
    ask(request, &args.client).await
}

pub async fn compat(args: CompatArgs) -> anyhow::Result<()> {
    ask(
        AdviceRequest::compatibility(args.device_a, args.device_b),
        &args.client,
    )
    .await
}

pub async fn troubleshoot(args: TroubleshootArgs) -> anyhow::Result<()> {
    ask(AdviceRequest::troubleshoot(args.issue), &args.client).await
}

pub async fn cache_clear(args: ClientArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let cache = crate::create_response_cache(&config.client).await;

    let removed = cache.len().await?;
    cache.clear().await?;

    info!(removed, "Response cache cleared");
    println!("Cleared {} cached answer(s).", removed);

    Ok(())
}

async fn ask(request: AdviceRequest, args: &ClientArgs) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let client = crate::create_advice_client(&config.client, !args.no_cache).await;

    let advice = client.submit(&request).await?;
    if advice.cached {
        info!(kind = %request.kind(), "Answer served from cache");
    }

    println!("{}", advice.text);

    Ok(())
}

fn load_config(args: &ClientArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    if let Some(endpoint) = &args.endpoint {
        config.client.endpoint = endpoint.clone();
    }

    logging::init_logging(&config.logging, LogOutput::Stderr);

    Ok(config)
}
