use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

mod matchups;
mod runner;

use matchups::MatchupFile;

/// Run auto-battler matchups over many seeds in parallel.
#[derive(Parser, Debug)]
#[command(name = "autogame-sim", version, about)]
struct Args {
    /// JSON file with abilities and matchups
    matchups: PathBuf,

    /// Number of seeds to run per matchup
    #[arg(long, default_value_t = 1)]
    seeds: u64,

    /// First seed of the range
    #[arg(long, default_value_t = 0)]
    base_seed: u64,

    /// Override the round cap
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Override the roster size limit for summons
    #[arg(long)]
    max_roster_size: Option<usize>,

    /// Do not fire on-hurt hooks
    #[arg(long)]
    no_hurt: bool,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Pretty-print the JSON summary
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let file = MatchupFile::load(&args.matchups)?;
    let registry = file.registry();

    let mut config = file.config.unwrap_or_default();
    if let Some(max_rounds) = args.max_rounds {
        config = config.with_max_rounds(max_rounds);
    }
    if let Some(max_roster_size) = args.max_roster_size {
        config = config.with_max_roster_size(max_roster_size);
    }
    if args.no_hurt {
        config = config.with_on_hurt(false);
    }

    let end_seed = args
        .base_seed
        .checked_add(args.seeds)
        .context("seed range overflows u64")?;
    info!(
        "running {} matchups x {} seeds ({} templates with abilities)",
        file.matchups.len(),
        args.seeds,
        registry.len()
    );

    let summaries = runner::run_matchups(&file.matchups, &registry, config, args.base_seed..end_seed);

    let output = if args.pretty {
        serde_json::to_string_pretty(&summaries)?
    } else {
        serde_json::to_string(&summaries)?
    };
    println!("{output}");
    Ok(())
}
