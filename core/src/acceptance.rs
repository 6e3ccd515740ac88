use std::fs::read_to_string;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::LogError;

lazy_static! {
    static ref AR_PATTERN: Regex = Regex::new(r"AR:\s([0-9]+\.[0-9]+)").unwrap();
}

/// Acceptance-ratio samples in file order, one per logged structure.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptanceSeries {
    pub samples: Vec<f64>,
}

impl AcceptanceSeries {
    /// Scan the whole file for `AR: <float>` occurrences.
    pub fn from_file(path: &Path) -> Result<Self, LogError> {
        let contents = read_to_string(path)
            .map_err(|_| LogError::FileNotFound(path.to_string_lossy().to_string()))?;
        Ok(Self::from_contents(&contents))
    }

    pub fn from_contents(contents: &str) -> Self {
        let samples: Vec<f64> = AR_PATTERN
            .captures_iter(contents)
            .map(|capture| capture[1].parse().unwrap())
            .collect();
        debug!("scan matched {} acceptance samples", samples.len());
        AcceptanceSeries { samples }
    }

    /// Arithmetic mean of the samples. The empty series has no mean.
    pub fn mean(&self) -> Result<f64, LogError> {
        if self.samples.is_empty() {
            return Err(LogError::NoSamples);
        }
        Ok(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }
}
