#[macro_use]
extern crate log;

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use dotenv::dotenv;
use fittrack::{OutputFormat, demo_packages, load_packages, render, write_summaries};
use fittrack_algos::read_package;
use fittrack_types::TrainingPackage;

#[derive(Parser)]
#[command(version, about = "Distance, speed and calorie estimates for tracked trainings")]
pub struct FitTrackCli {
    #[arg(env = "FITTRACK_FORMAT", long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: Option<FitTrackCommand>,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Print summaries for the built-in sample packages (default)
    ///
    Demo,
    ///
    /// Summarize a single package, e.g. `calc RUN 15000 1 75`
    ///
    Calc {
        workout_type: String,
        #[arg(required = true, allow_negative_numbers = true)]
        data: Vec<f64>,
    },
    ///
    /// Summarize a JSON array of packages, `-` reads stdin
    ///
    Batch {
        #[arg(long, short, env = "FITTRACK_INPUT")]
        input: PathBuf,
    },
    ///
    /// Print shell completions
    ///
    Completions { shell: clap_complete::Shell },
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = dotenv_result {
        debug!("No .env loaded: {}", error);
    }

    let cli = FitTrackCli::parse();
    let format = cli.format;

    match cli.subcommand.unwrap_or(FitTrackCommand::Demo) {
        FitTrackCommand::Demo => print_packages(&demo_packages(), format),
        FitTrackCommand::Calc { workout_type, data } => {
            let summary = read_package(&workout_type, &data)?.summary();
            println!("{}", render(&summary, format)?);
            Ok(())
        }
        FitTrackCommand::Batch { input } => {
            let reader: Box<dyn Read> = if input.as_os_str() == "-" {
                Box::new(io::stdin().lock())
            } else {
                let file = File::open(&input)
                    .with_context(|| format!("Cannot open {}", input.display()))?;
                Box::new(BufReader::new(file))
            };

            let packages = load_packages(reader)?;
            info!("Loaded {} packages", packages.len());
            print_packages(&packages, format)
        }
        FitTrackCommand::Completions { shell } => {
            let mut command = FitTrackCli::command();
            let name = command.get_name().to_owned();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Failed packages are logged and skipped; they never change the exit code.
fn print_packages(packages: &[TrainingPackage], format: OutputFormat) -> anyhow::Result<()> {
    let written = write_summaries(packages, format, &mut io::stdout().lock())?;
    debug!("Printed {} of {} packages", written, packages.len());
    Ok(())
}
