use std::path::PathBuf;
use log::info;
use runplot_core::{save_csv, save_json, AcceptanceSeries, EnergyLog, GroupedSeries};

use crate::args::ExportFormat;
use crate::plot;

pub fn plot_acceptance_ratio(file: &PathBuf, out_file: &PathBuf) {
    let series = AcceptanceSeries::from_file(file).expect("Can't read run log");
    let average = series.mean().expect("Run log has no acceptance samples");
    info!(
        "{} acceptance samples, average {:.6}",
        series.samples.len(),
        average
    );
    plot::acceptance_chart(&series, average, &plot::PALETTE, out_file)
        .expect("Can't render chart");
    info!("chart saved to {}", out_file.to_string_lossy());
}

pub fn plot_energy(file: &PathBuf, out_file: &PathBuf, group: bool, dev: bool) {
    let log = EnergyLog::from_file(file).expect("Can't read run log");
    info!("{} terms over {} iterations", log.terms.len(), log.iterations());
    if dev {
        todo!()
    } else if group {
        let grouped = GroupedSeries::from_log(&log).expect("Run log misses a grouped term");
        plot::grouped_chart(&grouped, &plot::PALETTE, out_file).expect("Can't render chart");
    } else {
        plot::all_terms_chart(&log, &plot::PALETTE, out_file).expect("Can't render chart");
    }
    info!("chart saved to {}", out_file.to_string_lossy());
}

pub fn export(file: &PathBuf, out_file: &PathBuf, format: &ExportFormat, pretty: bool) {
    let log = EnergyLog::from_file(file).expect("Can't read run log");
    match format {
        ExportFormat::Csv => {
            save_csv(&log, out_file).expect("Can't write CSV");
        }
        ExportFormat::Json => {
            save_json(&log, out_file, pretty).expect("Can't write JSON");
        }
    }
}
