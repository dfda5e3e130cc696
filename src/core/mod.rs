//! Core business logic abstractions

pub mod cache;
pub mod compare;
pub mod config;
pub mod currency;
pub mod error;
pub mod exchange;
pub mod log;
pub mod normalizer;
pub mod percentile;
pub mod reference;
pub mod registry;
pub mod resolver;

// Re-export main types for cleaner imports
pub use compare::{ComparisonOutcome, ComparisonRequest, ComparisonResult, ComparisonService};
pub use currency::{Clock, CurrencyRateProvider, DailyRateSource, FixedClock, SystemClock};
pub use error::WealthError;
pub use exchange::ExchangeRateClient;
pub use normalizer::{NormalizedWealth, WealthNormalizer};
pub use percentile::{PercentileMatch, TOP_PERCENTILE, match_percentile};
pub use reference::ReferenceDataStore;
pub use registry::Continent;
pub use resolver::CountryCodeResolver;
