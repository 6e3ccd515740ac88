use rayon::prelude::*;

use crate::{EnergyLog, LogError};

/// Terms summed into the molecular-mechanics group.
pub const AMBER_TERMS: [&str; 7] = [
    "eBond",
    "eAngle",
    "eDihedral",
    "eCoulomb",
    "eCoulomb14",
    "eLJ",
    "eLJ14",
];

/// Terms summed into the knowledge-based group.
pub const COARSE_GRAIN_TERMS: [&str; 3] = ["eContacts", "eSol", "eH"];

/// Elementwise sums of the two fixed term groups.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSeries {
    pub amber: Vec<f64>,
    pub coarse_grain: Vec<f64>,
}

impl GroupedSeries {
    /// Derive both grouped series. Every group term must be declared in the
    /// log, there is no fallback for absent terms.
    pub fn from_log(log: &EnergyLog) -> Result<Self, LogError> {
        Ok(GroupedSeries {
            amber: sum_terms(log, &AMBER_TERMS)?,
            coarse_grain: sum_terms(log, &COARSE_GRAIN_TERMS)?,
        })
    }
}

fn sum_terms(log: &EnergyLog, terms: &[&str]) -> Result<Vec<f64>, LogError> {
    for term in terms {
        if !log.series.contains_key(*term) {
            return Err(LogError::MissingTerm(term.to_string()));
        }
    }
    let count = log.series[terms[0]].len();
    let sums = (0..count)
        .into_par_iter()
        .map(|index| terms.iter().map(|term| log.series[*term][index]).sum())
        .collect();
    Ok(sums)
}
