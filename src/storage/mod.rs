//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use polars::prelude::*;
use serde_json::to_string_pretty;

use crate::cluster::GraphStats;
use crate::hubs::HubRecord;

/// Save analysis results to the specified directory
pub fn save_results(hubs: &[HubRecord], stats: &GraphStats, output_dir: &Path) -> Result<()> {
    log::info!("Saving results to {}", output_dir.display());

    fs::create_dir_all(output_dir)?;

    save_hubs(hubs, &output_dir.join("hubs.csv"))?;
    save_stats(stats, &output_dir.join("stats.json"))?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Write hubs as `key,score,degree` rows in selection order
pub fn save_hubs(hubs: &[HubRecord], path: &Path) -> Result<()> {
    log::info!("Saving {} hubs to {}", hubs.len(), path.display());

    let keys: Vec<&str> = hubs.iter().map(|h| h.key.as_str()).collect();
    let scores: Vec<f64> = hubs.iter().map(|h| h.score).collect();
    let degrees: Vec<u64> = hubs.iter().map(|h| h.degree as u64).collect();

    let mut df = df!(
        "key" => keys,
        "score" => scores,
        "degree" => degrees
    )?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;

    Ok(())
}

/// Write the component summary as pretty JSON
pub fn save_stats(stats: &GraphStats, path: &Path) -> Result<()> {
    log::info!("Saving statistics for {} components to {}", stats.n_subgraphs, path.display());

    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(stats)?.as_bytes())?;

    Ok(())
}
