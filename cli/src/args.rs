use clap::{Parser, Subcommand};
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// path to the simulation run log
    #[arg(short = 'f', long)]
    pub file: PathBuf,
    /// pretty print exported JSON
    #[arg(long)]
    pub pretty_print: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum ExportFormat {
    /// one row per iteration, one column per term
    Csv,
    /// the whole parsed log, terms with series and targets
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// plot acceptance ratio over logged structures
    AcceptanceRatio {
        /// file for the rendered chart
        #[arg(short = 'o', long, default_value = "acceptance.svg")]
        out_file: PathBuf,
    },
    /// plot per-term energy contributions over iterations
    Energy {
        /// file for the rendered chart
        #[arg(short = 'o', long, default_value = "energy.svg")]
        out_file: PathBuf,
        /// show only grouped contributions (Amber/coarseGrain)
        #[arg(short = 'g', long)]
        group: bool,
        /// per-term deviation view, under development
        #[arg(short = 'd', long)]
        dev: bool,
    },
    /// export the parsed energy series
    Export {
        /// file for the exported data
        #[arg(short = 'o', long, default_value = "energy.csv")]
        out_file: PathBuf,
        /// output format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}
