use crate::math_utils::sorted_sum;
use crate::turbine::TurbineRecord;
use serde::{Deserialize, Serialize};

/// Headline numbers for the summary panel.
///
/// `total_mw` is rounded to whole megawatts, unlike per-cell totals which keep
/// one decimal.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TurbineStats {
    pub count: usize,
    pub total_mw: f64,
}

pub fn summarize(records: &[TurbineRecord]) -> TurbineStats {
    let mut capacities: Vec<f64> = records.iter().map(TurbineRecord::capacity_mw).collect();
    let total = sorted_sum(&mut capacities);
    TurbineStats {
        count: records.len(),
        total_mw: total.round(),
    }
}
