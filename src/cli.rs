use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "stocksort")]
#[command(about = "Index, aggregate and benchmark-sort archived daily stock data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the date-sorted and per-ticker aggregate reports
    Report {
        /// Path to the ZIP archive of per-ticker CSV files
        #[arg(short, long)]
        archive: PathBuf,

        /// Output path for the date-sorted report
        #[arg(long, default_value = "sorted_stock_data.csv")]
        sorted_out: PathBuf,

        /// Output path for the per-ticker aggregates report
        #[arg(long, default_value = "averages.csv")]
        aggregates_out: PathBuf,
    },
    /// Interactively time the sorting strategies over random samples
    Bench {
        /// Path to the ZIP archive of per-ticker CSV files
        #[arg(short, long)]
        archive: PathBuf,
    },
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            archive,
            sorted_out,
            aggregates_out,
        } => {
            commands::report::run(&archive, &sorted_out, &aggregates_out);
        }
        Commands::Bench { archive } => {
            commands::bench::run(&archive);
        }
    }
}
