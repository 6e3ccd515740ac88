mod acceptance;
mod energy;
mod error;
mod export;
mod groups;

pub use acceptance::AcceptanceSeries;
pub use energy::parse_value;
pub use energy::EnergyLog;
pub use error::LogError;
pub use export::save_csv;
pub use export::save_json;
pub use groups::GroupedSeries;
pub use groups::AMBER_TERMS;
pub use groups::COARSE_GRAIN_TERMS;

use itertools::Itertools;
use itertools::MinMaxResult::{MinMax, NoElements, OneElement};

/// Smallest and largest value in a series. Used for chart axis ranging.
pub fn series_bounds(values: &[f64]) -> (f64, f64) {
    match values.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        NoElements => (0.0, 1.0),
        OneElement(v) => (v, v),
        MinMax(lo, hi) => (lo, hi),
    }
}
