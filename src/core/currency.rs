//! Currency conversion abstractions

use crate::core::error::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Conversion rates as seen by the normalization pipeline.
#[async_trait]
pub trait CurrencyRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64>;

    /// Upper-cased ISO codes the rate backend can quote.
    async fn supported_currencies(&self) -> Result<Arc<HashSet<String>>>;
}

/// A rate backend queried for a single calendar day.
#[async_trait]
pub trait DailyRateSource: Send + Sync {
    async fn rate_on(&self, base: &str, quote: &str, date: NaiveDate) -> anyhow::Result<f64>;

    async fn currencies(&self) -> anyhow::Result<Vec<String>>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a settable date.
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.lock().unwrap_or_else(|p| p.into_inner()) = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.date.lock().unwrap_or_else(|p| p.into_inner())
    }
}
