//! Converts a raw net worth into international dollars:
//! currency conversion, then CPI deflation, then PPP deflation.

use crate::core::currency::CurrencyRateProvider;
use crate::core::error::{Result, WealthError};
use crate::core::reference::ReferenceDataStore;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Every intermediate figure of a normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedWealth {
    pub input_currency: String,
    pub original_net_worth: f64,
    pub official_currency: String,
    pub exchange_rate: f64,
    pub converted_net_worth_in_official: f64,
    pub deflated_net_worth: f64,
    pub international_net_worth: f64,
}

/// Accepts JSON numbers and numeric strings; zero and negatives are valid.
pub fn parse_amount(raw: &Value) -> Result<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| WealthError::InvalidAmount(raw.to_string()))
}

pub struct WealthNormalizer {
    store: Arc<ReferenceDataStore>,
    rates: Arc<dyn CurrencyRateProvider>,
}

impl WealthNormalizer {
    pub fn new(store: Arc<ReferenceDataStore>, rates: Arc<dyn CurrencyRateProvider>) -> Self {
        Self { store, rates }
    }

    #[instrument(name = "Normalize", skip(self, amount))]
    pub async fn to_international_dollars(
        &self,
        amount: &Value,
        input_currency: &str,
        residence_code: &str,
    ) -> Result<NormalizedWealth> {
        let official_currency = self.store.official_currency(residence_code)?.to_string();
        let original = parse_amount(amount)?;
        let indicators = self.store.indicators_for(residence_code)?;

        let input_currency = input_currency.trim().to_uppercase();
        let rate = if input_currency == official_currency {
            1.0
        } else {
            self.rates.get_rate(&input_currency, &official_currency).await?
        };

        let converted = original * rate;
        let deflated = converted / (1.0 + indicators.cpi / 100.0);
        let international = deflated / indicators.ppp;
        if !international.is_finite() {
            return Err(WealthError::InvalidAmount(amount.to_string()));
        }
        debug!(converted, deflated, international, "Normalized net worth");

        Ok(NormalizedWealth {
            input_currency,
            original_net_worth: original,
            official_currency,
            exchange_rate: rate,
            converted_net_worth_in_official: converted,
            deflated_net_worth: deflated,
            international_net_worth: international,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedRates {
        rate: f64,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CurrencyRateProvider for FixedRates {
        async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if from == "XXX" {
                return Err(WealthError::RateUnavailable {
                    base: from.to_string(),
                    quote: to.to_string(),
                    days: 7,
                });
            }
            Ok(self.rate)
        }

        async fn supported_currencies(&self) -> Result<Arc<HashSet<String>>> {
            Ok(Arc::new(HashSet::new()))
        }
    }

    fn normalizer(rate: f64) -> (WealthNormalizer, Arc<FixedRates>) {
        let store = ReferenceDataStore::from_readers(
            "Country Code,PPP,CPI\nFR,1.2,5\nUS,1.0,0\n".as_bytes(),
            "combined.csv",
            "Country Code,p0p1\nFR,1\n".as_bytes(),
            "wealth_ladders.csv",
        )
        .unwrap();
        let rates = Arc::new(FixedRates {
            rate,
            calls: AtomicUsize::new(0),
        });
        (WealthNormalizer::new(Arc::new(store), rates.clone()), rates)
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&json!(100000)).unwrap(), 100000.0);
        assert_eq!(parse_amount(&json!(" -250.5 ")).unwrap(), -250.5);
        assert_eq!(parse_amount(&json!("0")).unwrap(), 0.0);
        assert!(matches!(
            parse_amount(&json!("abc")),
            Err(WealthError::InvalidAmount(_))
        ));
        assert!(parse_amount(&Value::Null).is_err());
        assert!(parse_amount(&json!("NaN")).is_err());
        assert!(parse_amount(&json!([1])).is_err());
    }

    #[tokio::test]
    async fn test_france_scenario() {
        let (normalizer, _) = normalizer(0.9);
        let result = normalizer
            .to_international_dollars(&json!(100000), "usd", "FR")
            .await
            .unwrap();

        assert_eq!(result.official_currency, "EUR");
        assert!((result.converted_net_worth_in_official - 90000.0).abs() < 1e-6);
        assert!((result.deflated_net_worth - 85714.2857).abs() < 1e-3);
        assert!((result.international_net_worth - 71428.5714).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_matching_currency_skips_conversion() {
        let (normalizer, rates) = normalizer(0.9);
        let result = normalizer
            .to_international_dollars(&json!("1000"), "EUR", "FR")
            .await
            .unwrap();
        assert_eq!(result.exchange_rate, 1.0);
        assert_eq!(result.converted_net_worth_in_official, 1000.0);
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_amount_fails_before_rate_lookup() {
        let (normalizer, rates) = normalizer(0.9);
        let err = normalizer
            .to_international_dollars(&json!("abc"), "USD", "FR")
            .await
            .unwrap_err();
        assert!(matches!(err, WealthError::InvalidAmount(_)));
        assert_eq!(rates.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_indicators_and_rates_propagate() {
        let (normalizer, _) = normalizer(0.9);
        assert!(matches!(
            normalizer.to_international_dollars(&json!(1), "USD", "DE").await,
            Err(WealthError::NotFound { .. })
        ));
        assert!(matches!(
            normalizer.to_international_dollars(&json!(1), "XXX", "FR").await,
            Err(WealthError::RateUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_negative_net_worth_is_accepted() {
        let (normalizer, _) = normalizer(1.0);
        let result = normalizer
            .to_international_dollars(&json!(-500), "USD", "US")
            .await
            .unwrap();
        assert_eq!(result.international_net_worth, -500.0);
    }
}
