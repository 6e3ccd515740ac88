use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::LogError;

/// Per-term energy series parsed from one run log.
///
/// Header records (`Step ...`) declare term names. Best records (`(BEST) ...`)
/// append one value per declared term, target records (`(TRGT) ...`) store a
/// reference value per term. Value tokens are matched with terms positionally,
/// starting at the third token; the match truncates to the shorter side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyLog {
    /// term names in declaration order; repeated headers accumulate names
    pub terms: Vec<String>,
    /// per-term values, one appended per best record
    pub series: HashMap<String, Vec<f64>>,
    /// per-term reference value, last target record wins
    pub targets: HashMap<String, f64>,
}

const HEADER_MARKER: &str = "Step";
const BEST_MARKER: &str = "(BEST)";
const TARGET_MARKER: &str = "(TRGT)";

/// Parse one energy value token. The log writes `NaN` for terms that were not
/// evaluated on an iteration; those substitute 0.0 so the series stays dense.
///
/// # Examples
///
/// ```
/// # use runplot_core::parse_value;
/// assert_eq!(parse_value("2.5").unwrap(), 2.5);
/// assert_eq!(parse_value("NaN").unwrap(), 0.0);
/// assert!(parse_value("eBond").is_err());
/// ```
pub fn parse_value(token: &str) -> Result<f64, LogError> {
    if token == "NaN" {
        return Ok(0.0);
    }
    token
        .parse()
        .map_err(|_| LogError::BadNumber(token.to_string()))
}

impl EnergyLog {
    pub fn new() -> Self {
        EnergyLog {
            terms: Vec::new(),
            series: HashMap::new(),
            targets: HashMap::new(),
        }
    }

    /// Read a run log line by line. Lines that carry none of the record
    /// markers are ignored.
    pub fn from_file(path: &Path) -> Result<Self, LogError> {
        let file = File::open(path)
            .map_err(|_| LogError::FileNotFound(path.to_string_lossy().to_string()))?;
        let mut log = EnergyLog::new();
        for line in BufReader::new(file).lines().flatten() {
            log.read_record(&line)?;
        }
        debug!(
            "run log declares {} terms, {} targets",
            log.terms.len(),
            log.targets.len()
        );
        Ok(log)
    }

    fn read_record(&mut self, line: &str) -> Result<(), LogError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(&HEADER_MARKER) => {
                for name in &tokens[1..] {
                    self.terms.push(name.to_string());
                }
                // a header resets every declared series
                for name in &self.terms {
                    self.series.insert(name.clone(), Vec::new());
                }
            }
            Some(&BEST_MARKER) => {
                let values = tokens.get(2..).unwrap_or(&[]);
                if values.len() > self.terms.len() {
                    warn!(
                        "best record carries {} values for {} terms, excess dropped",
                        values.len(),
                        self.terms.len()
                    );
                }
                for (name, token) in self.terms.iter().zip(values) {
                    let value = parse_value(token)?;
                    self.series
                        .get_mut(name)
                        .expect("declared terms always carry a series")
                        .push(value);
                }
            }
            Some(&TARGET_MARKER) => {
                let values = tokens.get(2..).unwrap_or(&[]);
                for (name, token) in self.terms.iter().zip(values) {
                    let value = parse_value(token)?;
                    self.targets.insert(name.clone(), value);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Number of best records reflected in the series, i.e. the length of the
    /// longest declared series.
    pub fn iterations(&self) -> usize {
        self.terms
            .iter()
            .map(|term| self.series[term.as_str()].len())
            .max()
            .unwrap_or(0)
    }

    /// Reference value for a term, 0.0 when no target record declared one.
    pub fn target(&self, term: &str) -> f64 {
        self.targets.get(term).copied().unwrap_or(0.0)
    }
}

impl Default for EnergyLog {
    fn default() -> Self {
        EnergyLog::new()
    }
}
