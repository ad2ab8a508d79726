#![deny(warnings)]

//! Console front end: play the election interactively or let a strategy play.

use anyhow::{bail, Context, Result};
use election_ai::{plan_winning_path, Strategy};
use election_core::{builtin_scenarios, GameState, Scenario};
use election_runtime::{run_game, ConsoleDecider, StrategyDecider};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct Args {
    autoplay: Option<String>,
    json: bool,
    version: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--autoplay" => match it.next() {
                Some(mode) => parsed.autoplay = Some(mode),
                None => bail!("--autoplay needs a mode (best, worst or plan)"),
            },
            "--json" => parsed.json = true,
            "--version" => parsed.version = true,
            _ => {}
        }
    }
    Ok(parsed)
}

fn strategy_for(mode: &str, scenarios: &[Scenario]) -> Result<Strategy> {
    match mode {
        "best" => Ok(Strategy::MaxApproval),
        "worst" => Ok(Strategy::MinApproval),
        "plan" => {
            let plan = plan_winning_path(scenarios, GameState::initial())
                .context("no winning path exists for this campaign")?;
            Ok(Strategy::Scripted(plan.choices))
        }
        other => bail!("unknown autoplay mode {other:?} (expected best, worst or plan)"),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so the game transcript on stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.version {
        println!(
            "election {} ({} built {})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    info!(?args, "starting CLI");

    let scenarios = builtin_scenarios();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = match args.autoplay.as_deref() {
        None => {
            let mut player = ConsoleDecider::new(io::stdin().lock());
            run_game(&scenarios, &mut player, &mut out)?
        }
        Some(mode) => {
            let mut player = StrategyDecider::new(strategy_for(mode, &scenarios)?);
            run_game(&scenarios, &mut player, &mut out)?
        }
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    }
    Ok(())
}
