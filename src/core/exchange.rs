//! Exchange-rate lookups with a bounded backward walk over calendar days.

use crate::core::cache::Cache;
use crate::core::currency::{Clock, CurrencyRateProvider, DailyRateSource};
use crate::core::error::{Result, WealthError};
use async_trait::async_trait;
use chrono::Days;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

pub struct ExchangeRateClient {
    source: Arc<dyn DailyRateSource>,
    cache: Arc<Cache<(String, String), f64>>,
    currencies: OnceCell<Arc<HashSet<String>>>,
    clock: Arc<dyn Clock>,
    lookback_days: u32,
}

impl ExchangeRateClient {
    pub fn new(
        source: Arc<dyn DailyRateSource>,
        cache: Arc<Cache<(String, String), f64>>,
        clock: Arc<dyn Clock>,
        lookback_days: u32,
    ) -> Self {
        Self {
            source,
            cache,
            currencies: OnceCell::new(),
            clock,
            lookback_days,
        }
    }

    /// Walks back from today until a day yields a usable rate. Per-day
    /// failures are swallowed; only exhausting the window is an error.
    async fn fetch_walking_back(&self, base: &str, quote: &str) -> Result<f64> {
        let today = self.clock.today();
        for offset in 0..self.lookback_days {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            match self.source.rate_on(base, quote, date).await {
                Ok(rate) if rate.is_finite() && rate > 0.0 => {
                    debug!(%base, %quote, %date, rate, "Found exchange rate");
                    return Ok(rate);
                }
                Ok(rate) => debug!(%base, %quote, %date, rate, "Ignoring unusable rate"),
                Err(e) => debug!(%base, %quote, %date, "Rate lookup failed: {e}"),
            }
        }
        Err(WealthError::RateUnavailable {
            base: base.to_string(),
            quote: quote.to_string(),
            days: self.lookback_days,
        })
    }
}

fn normalize_currency(code: &str) -> String {
    code.trim().to_uppercase()
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

#[async_trait]
impl CurrencyRateProvider for ExchangeRateClient {
    #[instrument(name = "RateFor", skip(self))]
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let base = normalize_currency(from);
        let quote = normalize_currency(to);
        if base == quote {
            return Ok(1.0);
        }
        if let Some(bad) = [&base, &quote].into_iter().find(|c| !is_currency_code(c)) {
            return Err(WealthError::UnknownCurrency(bad.clone()));
        }

        let key = (base, quote);
        if let Some(rate) = self.cache.get(&key).await {
            return Ok(rate);
        }
        let rate = self.fetch_walking_back(&key.0, &key.1).await?;
        self.cache.put(key, rate).await;
        Ok(rate)
    }

    async fn supported_currencies(&self) -> Result<Arc<HashSet<String>>> {
        self.currencies
            .get_or_try_init(|| async {
                let codes = self
                    .source
                    .currencies()
                    .await
                    .map_err(|e| WealthError::UpstreamUnavailable(e.to_string()))?;
                debug!(count = codes.len(), "Fetched supported currencies");
                Ok::<_, WealthError>(Arc::new(codes.iter().map(|c| normalize_currency(c)).collect()))
            })
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::FixedClock;
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockSource {
        available_on: Option<NaiveDate>,
        rate: f64,
        calls: Mutex<Vec<NaiveDate>>,
        currency_calls: AtomicUsize,
    }

    impl MockSource {
        fn new(available_on: Option<NaiveDate>, rate: f64) -> Self {
            Self {
                available_on,
                rate,
                calls: Mutex::new(Vec::new()),
                currency_calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> Vec<NaiveDate> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DailyRateSource for MockSource {
        async fn rate_on(&self, _base: &str, _quote: &str, date: NaiveDate) -> anyhow::Result<f64> {
            self.calls.lock().unwrap().push(date);
            match self.available_on {
                Some(day) if date <= day => Ok(self.rate),
                _ => Err(anyhow!("HTTP error: 404 Not Found")),
            }
        }

        async fn currencies(&self) -> anyhow::Result<Vec<String>> {
            self.currency_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["usd".to_string(), "eur".to_string()])
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn client(source: Arc<MockSource>, clock: Arc<FixedClock>) -> ExchangeRateClient {
        ExchangeRateClient::new(source, Arc::new(Cache::new()), clock, DEFAULT_LOOKBACK_DAYS)
    }

    #[tokio::test]
    async fn test_same_currency_short_circuits() {
        let source = Arc::new(MockSource::new(None, 0.9));
        let client = client(source.clone(), Arc::new(FixedClock::new(date(2024, 3, 8))));

        assert_eq!(client.get_rate("USD", "USD").await.unwrap(), 1.0);
        assert_eq!(client.get_rate("eur", " EUR ").await.unwrap(), 1.0);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_walks_back_to_first_available_day() {
        let source = Arc::new(MockSource::new(Some(date(2024, 3, 6)), 0.9));
        let client = client(source.clone(), Arc::new(FixedClock::new(date(2024, 3, 8))));

        assert_eq!(client.get_rate("USD", "EUR").await.unwrap(), 0.9);
        assert_eq!(
            source.calls(),
            vec![date(2024, 3, 8), date(2024, 3, 7), date(2024, 3, 6)]
        );
    }

    #[tokio::test]
    async fn test_rate_unavailable_after_lookback_window() {
        let source = Arc::new(MockSource::new(None, 0.9));
        let client = client(source.clone(), Arc::new(FixedClock::new(date(2024, 3, 8))));

        let err = client.get_rate("USD", "EUR").await.unwrap_err();
        assert_eq!(
            err,
            WealthError::RateUnavailable {
                base: "USD".to_string(),
                quote: "EUR".to_string(),
                days: 7
            }
        );
        let calls = source.calls();
        assert_eq!(calls.len(), 7);
        assert_eq!(calls.last(), Some(&date(2024, 3, 2)));
    }

    #[tokio::test]
    async fn test_cached_rate_survives_clock_advance() {
        let source = Arc::new(MockSource::new(Some(date(2024, 3, 8)), 0.9));
        let clock = Arc::new(FixedClock::new(date(2024, 3, 8)));
        let client = client(source.clone(), clock.clone());

        let first = client.get_rate("USD", "EUR").await.unwrap();
        clock.set(date(2024, 4, 1));
        let second = client.get_rate("usd", "eur").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let source = Arc::new(MockSource::new(None, 0.9));
        let client = client(source.clone(), Arc::new(FixedClock::new(date(2024, 3, 8))));

        assert!(client.get_rate("USD", "EUR").await.is_err());
        assert!(client.get_rate("USD", "EUR").await.is_err());
        assert_eq!(source.calls().len(), 14);
    }

    #[tokio::test]
    async fn test_malformed_code_skips_provider() {
        let source = Arc::new(MockSource::new(Some(date(2024, 3, 8)), 0.9));
        let client = client(source.clone(), Arc::new(FixedClock::new(date(2024, 3, 8))));

        assert_eq!(
            client.get_rate("", "EUR").await,
            Err(WealthError::UnknownCurrency(String::new()))
        );
        let err = client.get_rate("usd", "euro").await.unwrap_err();
        assert_eq!(err, WealthError::UnknownCurrency("EURO".to_string()));
        assert_eq!(err.to_string(), "Unknown currency code: \"EURO\"");
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_supported_currencies_fetched_once() {
        let source = Arc::new(MockSource::new(None, 0.9));
        let client = client(source.clone(), Arc::new(FixedClock::new(date(2024, 3, 8))));

        let first = client.supported_currencies().await.unwrap();
        let second = client.supported_currencies().await.unwrap();
        assert!(first.contains("USD"));
        assert!(second.contains("EUR"));
        assert_eq!(source.currency_calls.load(Ordering::SeqCst), 1);
    }
}
