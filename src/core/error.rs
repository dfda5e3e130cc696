//! Error taxonomy for the wealth-normalization pipeline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WealthError {
    /// A free-text country identifier matched nothing in the registry.
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    /// An alpha-2 code has no registry entry.
    #[error("Unknown country code: {0}")]
    UnknownCode(String),

    /// A reference dataset has no row for the requested code.
    #[error("No {dataset} data found for country code: {code}")]
    NotFound { dataset: &'static str, code: String },

    #[error("Invalid net worth amount: {0}")]
    InvalidAmount(String),

    /// Not a three-letter currency code.
    #[error("Unknown currency code: {0:?}")]
    UnknownCurrency(String),

    #[error("No exchange rate available for {base}->{quote} within the last {days} days")]
    RateUnavailable {
        base: String,
        quote: String,
        days: u32,
    },

    #[error("Wealth ladder is empty")]
    InvalidLadder,

    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed dataset {path}: {reason}")]
    Dataset { path: String, reason: String },
}

impl WealthError {
    /// Errors caused by the request itself (or by data the request points at),
    /// as opposed to failures of the service or its collaborators.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            WealthError::UnknownCountry(_)
                | WealthError::UnknownCode(_)
                | WealthError::NotFound { .. }
                | WealthError::InvalidAmount(_)
                | WealthError::UnknownCurrency(_)
                | WealthError::RateUnavailable { .. }
        )
    }
}

pub type Result<T, E = WealthError> = std::result::Result<T, E>;
