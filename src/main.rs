use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use kinship_hub_analyzer::config::Config;
use kinship_hub_analyzer::{analyze, data, storage, AnalyzerError};

#[derive(Parser, Debug)]
#[clap(
    name = "kinship-hub-analyzer",
    about = "Hub extraction and connectivity statistics for kinship networks"
)]
struct Cli {
    /// Path to the links CSV (columns: rel,a,b)
    #[clap(long)]
    input: PathBuf,

    /// Output directory for results
    #[clap(long, default_value = "analysis_results")]
    output_dir: PathBuf,

    /// Stop extracting once a hub removes fewer neighbors than this
    #[clap(long, default_value = "3")]
    min_degree: usize,

    /// Maximum number of hubs to extract
    #[clap(long, default_value = "100")]
    max_hubs: usize,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = Config::new(args.min_degree, args.max_hubs, args.threads);

    let num_threads = config.worker_threads();
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .map_err(|_| AnalyzerError::ThreadPool(num_threads))?;

    log::info!("Starting kinship analysis");
    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output_dir.display());

    // 1. Load links
    let edges = data::links::load_links(&args.input)?;

    // 2. Extract hubs and measure components
    let (hubs, stats) = analyze(&edges, &config);

    // 3. Save results
    storage::save_results(&hubs, &stats, &args.output_dir)?;

    log::info!("Analysis complete. Results saved to {}", args.output_dir.display());

    Ok(())
}
