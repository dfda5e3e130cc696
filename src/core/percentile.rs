//! Mapping of a normalized wealth figure onto a percentile ladder.

use crate::core::error::{Result, WealthError};

/// Percentile reported when a value reaches or passes the last cut-point.
/// Consumers render it as "top percentile", so it stays 99 whatever the
/// ladder length.
pub const TOP_PERCENTILE: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileMatch {
    /// Largest threshold not exceeded by the value, 0 below the first one.
    pub threshold: f64,
    pub percentile: usize,
}

/// Finds the first threshold strictly greater than `value`; its index is the
/// percentile bucket.
pub fn match_percentile(value: f64, thresholds: &[f64]) -> Result<PercentileMatch> {
    let Some(last) = thresholds.last() else {
        return Err(WealthError::InvalidLadder);
    };

    match thresholds.iter().position(|t| *t > value) {
        Some(0) => Ok(PercentileMatch {
            threshold: 0.0,
            percentile: 0,
        }),
        Some(idx) => Ok(PercentileMatch {
            threshold: thresholds[idx - 1],
            percentile: idx,
        }),
        None => Ok(PercentileMatch {
            threshold: *last,
            percentile: TOP_PERCENTILE,
        }),
    }
}
