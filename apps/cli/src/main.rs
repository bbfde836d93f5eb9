#![deny(warnings)]

//! Terminal front end for the Startup Survival Simulator.

mod console;

use anyhow::{bail, Context, Result};
use console::{Console, INTRO};
use sim_core::SimConfig;
use sim_runtime::Simulation;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, PartialEq)]
struct Args {
    name: Option<String>,
    seed: Option<u64>,
    autoplay: bool,
    json: bool,
    version: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut out = Args::default();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--name" => out.name = Some(it.next().context("--name needs a value")?),
            "--seed" => {
                let raw = it.next().context("--seed needs a value")?;
                let seed = raw
                    .parse::<u64>()
                    .with_context(|| format!("invalid --seed value {raw:?}"))?;
                out.seed = Some(seed);
            }
            "--autoplay" => out.autoplay = true,
            "--json" => out.json = true,
            "--version" | "-V" => out.version = true,
            other => bail!("unknown argument {other:?}"),
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    // Logging setup; game text goes to stdout, logs to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.version {
        println!(
            "startup-sim {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("GIT_SHA"),
            env!("BUILD_DATE")
        );
        return Ok(());
    }
    info!(?args, "starting CLI");

    // With --json and --autoplay nothing but the summary reaches stdout.
    let quiet = args.json && args.autoplay;
    let output: Box<dyn Write> = if quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout())
    };
    let mut console = Console::new(io::stdin().lock(), output);
    if args.autoplay {
        console = console.with_autopilot();
    }

    let rng_seed = args.seed.unwrap_or_else(rand::random);
    writeln!(console.output(), "{INTRO}")?;
    let startup_name = match args.name {
        Some(name) => name,
        None => console.request_startup_name()?,
    };
    let cfg = SimConfig {
        startup_name,
        rng_seed,
    };
    let mut sim = Simulation::from_config(&cfg)?;
    writeln!(
        console.output(),
        "Let's see if {} can survive the grind! (seed {})",
        cfg.startup_name,
        cfg.rng_seed
    )?;

    let summary = sim.run(&mut console)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        console.show_summary(&summary)?;
    }
    Ok(())
}
