use std::io::{Read, Write};

use anyhow::Context;
use fittrack_algos::{TrainingError, TrainingSummary};
use fittrack_types::TrainingPackage;

use crate::{OutputFormat, render};

/// Sample packages printed when no input is given.
pub const DEMO_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn demo_packages() -> Vec<TrainingPackage> {
    DEMO_PACKAGES
        .iter()
        .map(|(workout_type, data)| TrainingPackage::new(*workout_type, *data))
        .collect()
}

/// Reads a JSON array of packages.
pub fn load_packages(reader: impl Read) -> anyhow::Result<Vec<TrainingPackage>> {
    serde_json::from_reader(reader).context("Invalid training package list")
}

/// Summarizes every package in order. A bad package yields an error in its
/// slot and does not affect the ones after it.
pub fn run_packages(packages: &[TrainingPackage]) -> Vec<Result<TrainingSummary, TrainingError>> {
    packages
        .iter()
        .map(|package| {
            let summary = fittrack_algos::read(package).map(|training| training.summary());
            if let Err(error) = &summary {
                warn!("Skipping {} package: {}", package.workout_type, error);
            }
            summary
        })
        .collect()
}

/// Writes one rendered line per summarized package to `out`. Failed packages
/// are only logged by [`run_packages`]. Returns the number of lines written.
pub fn write_summaries(
    packages: &[TrainingPackage],
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut written = 0;
    for summary in run_packages(packages).into_iter().flatten() {
        writeln!(out, "{}", render(&summary, format)?)?;
        written += 1;
    }

    Ok(written)
}
