use clap::Parser;
use crate::args::*;
use crate::commands::{export, plot_acceptance_ratio, plot_energy};

mod args;
mod commands;
mod plot;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();
    let args = Args::parse();
    match &args.command {
        Commands::AcceptanceRatio { out_file } => {
            plot_acceptance_ratio(&args.file, out_file);
        }
        Commands::Energy {
            out_file,
            group,
            dev,
        } => {
            plot_energy(&args.file, out_file, *group, *dev);
        }
        Commands::Export { out_file, format } => {
            export(&args.file, out_file, format, args.pretty_print);
        }
    }
}
