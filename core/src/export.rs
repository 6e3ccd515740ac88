use std::fs::File;
use std::path::Path;

use log::info;

use crate::{EnergyLog, LogError};

/// Write the energy series as CSV: a `step` column plus one column per
/// declared term, one row per recorded iteration. Rows stop at the shortest
/// series so the table stays rectangular.
pub fn save_csv(log: &EnergyLog, path: &Path) -> Result<(), LogError> {
    let write_failed = || LogError::WriteFailed(path.to_string_lossy().to_string());
    let mut writer = csv::Writer::from_path(path).map_err(|_| write_failed())?;
    let mut header = vec!["step".to_string()];
    header.extend(log.terms.iter().cloned());
    writer.write_record(&header).map_err(|_| write_failed())?;
    let rows = log
        .terms
        .iter()
        .map(|term| log.series[term.as_str()].len())
        .min()
        .unwrap_or(0);
    for index in 0..rows {
        let mut record = vec![index.to_string()];
        for term in &log.terms {
            record.push(log.series[term.as_str()][index].to_string());
        }
        writer.write_record(&record).map_err(|_| write_failed())?;
    }
    writer.flush().map_err(|_| write_failed())?;
    info!("wrote {} rows to {}", rows, path.to_string_lossy());
    Ok(())
}

/// Write the whole parsed log as JSON.
pub fn save_json(log: &EnergyLog, path: &Path, pretty: bool) -> Result<(), LogError> {
    let write_failed = || LogError::WriteFailed(path.to_string_lossy().to_string());
    let file = File::create(path).map_err(|_| write_failed())?;
    let res = if pretty {
        serde_json::ser::to_writer_pretty(file, log)
    } else {
        serde_json::ser::to_writer(file, log)
    };
    if res.is_err() {
        return Err(write_failed());
    }
    Ok(())
}
