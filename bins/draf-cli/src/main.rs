//! draf-cli — command-line front end for the Dynamic Reward Allocation Formula.
//!
//! `demo` runs the worked example. `compute` reads parameters from a config
//! file, `DRAF_*` environment variables, and flags, then prints the reward or
//! the full breakdown as JSON. Logs go to stderr; stdout carries only results.

mod params;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use draf_core::traits::RewardCalculator;
use draf_core::types::{RatioPolicy, RewardBreakdown, RewardParams};
use draf_engine::DrafEngine;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::params::ParamSources;

/// Dynamic Reward Allocation Formula calculator.
#[derive(Parser, Debug)]
#[command(name = "draf-cli")]
#[command(version, about = "Compute a participant's share of a reward pool")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the reward for the built-in example participant.
    Demo,
    /// Compute a reward from a config file, the environment, and flags.
    Compute(ComputeArgs),
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// Config file with reward parameters (TOML or JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Clamp the proportional share into [0, 1].
    #[arg(long)]
    clamp_share: bool,

    /// Reject inconsistent parameters before computing.
    #[arg(long)]
    strict: bool,

    /// Print the full breakdown as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    fields: FieldArgs,
}

/// Per-field overrides. Each takes precedence over the config file and
/// environment.
#[derive(Args, Debug, Default)]
struct FieldArgs {
    /// Total reward available for distribution.
    #[arg(long, allow_negative_numbers = true)]
    reward_pool: Option<f64>,
    /// Participant's token amount.
    #[arg(long, allow_negative_numbers = true)]
    token_holding: Option<f64>,
    /// Sum of weighted tokens across all participants.
    #[arg(long, allow_negative_numbers = true)]
    total_weighted_tokens: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    beta_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    beta_max: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    alpha_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    alpha_max: Option<f64>,
    /// Duration the tokens have been held.
    #[arg(long, allow_negative_numbers = true)]
    holding_time: Option<f64>,
    /// Holding time at which the time bonus saturates.
    #[arg(long, allow_negative_numbers = true)]
    max_holding_time: Option<f64>,
    /// Divisor normalizing the holding into a proportional share.
    #[arg(long, allow_negative_numbers = true)]
    max_share: Option<f64>,
}

impl FieldArgs {
    fn overrides(&self) -> Vec<(&'static str, f64)> {
        [
            ("reward_pool", self.reward_pool),
            ("token_holding", self.token_holding),
            ("total_weighted_tokens", self.total_weighted_tokens),
            ("beta_min", self.beta_min),
            ("beta_max", self.beta_max),
            ("alpha_min", self.alpha_min),
            ("alpha_max", self.alpha_max),
            ("holding_time", self.holding_time),
            ("max_holding_time", self.max_holding_time),
            ("max_share", self.max_share),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

/// Result of `compute`, printed as the summary line or as JSON.
///
/// serde_json has no representation for non-finite floats, so an overflowing
/// reward prints as `null` in JSON while the summary line shows `inf`/`-inf`.
#[derive(Debug, Serialize)]
struct Report {
    policy: RatioPolicy,
    params: RewardParams,
    breakdown: RewardBreakdown,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    let result = match cli.command {
        Commands::Demo => run_demo(),
        Commands::Compute(args) => run_compute(args),
    };

    if let Err(e) = result {
        error!("{e:#}");
        process::exit(1);
    }
}

fn summary_line(reward: f64) -> String {
    format!("Reward for the participant: {reward:.2}")
}

fn run_demo() -> Result<()> {
    let params = RewardParams::example();
    info!(?params, "running worked example");
    let reward = DrafEngine::new()
        .compute_reward(&params)
        .context("example parameters")?;
    println!("{}", summary_line(reward));
    Ok(())
}

fn compute(args: &ComputeArgs) -> Result<Report> {
    let sources = ParamSources {
        file: args.config.clone(),
        overrides: args.fields.overrides(),
        ..ParamSources::default()
    };
    debug!(?sources, strict = args.strict, "loading reward parameters");
    let params = if args.strict {
        sources.load_strict()
    } else {
        sources.load()
    }
    .context("loading reward parameters")?;

    let engine = DrafEngine::with_policy(if args.clamp_share {
        RatioPolicy::Clamped
    } else {
        RatioPolicy::Unclamped
    });
    let breakdown = engine.breakdown(&params).context("computing reward")?;

    if breakdown.proportional_share.overflowed() {
        warn!(
            raw = breakdown.proportional_share.raw(),
            policy = ?engine.policy(),
            "proportional share outside [0, 1]"
        );
    }

    Ok(Report {
        policy: engine.policy(),
        params,
        breakdown,
    })
}

fn run_compute(args: ComputeArgs) -> Result<()> {
    let report = compute(&args)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", summary_line(report.breakdown.reward));
    }
    Ok(())
}

fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
