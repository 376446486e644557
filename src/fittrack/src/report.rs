use clap::ValueEnum;
use fittrack_algos::TrainingSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per training
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

pub fn render(summary: &TrainingSummary, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}
