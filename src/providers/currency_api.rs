use crate::core::currency::DailyRateSource;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

const LATEST: &str = "latest";

/// Daily snapshot currency API. Each snapshot lives under a dated URL:
/// `{base_url}/currencies/{base}.json` returns `{"date": ..., "<base>": {"<quote>": rate}}`
/// and `{base_url}/currencies.json` lists supported codes.
pub struct CurrencyApiProvider {
    base_url: String,
    client: reqwest::Client,
}

impl CurrencyApiProvider {
    /// `base_url` must contain a `{date}` placeholder.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("wealthrank/0.1")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(CurrencyApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn snapshot_url(&self, date: &str) -> String {
        self.base_url.replace("{date}", date)
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP error: {} for URL: {}", response.status(), url));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", url, e))
    }
}

#[async_trait]
impl DailyRateSource for CurrencyApiProvider {
    #[instrument(name = "CurrencyApiRate", skip(self))]
    async fn rate_on(&self, base: &str, quote: &str, date: NaiveDate) -> Result<f64> {
        let base = base.to_lowercase();
        let quote = quote.to_lowercase();
        let url = format!(
            "{}/currencies/{}.json",
            self.snapshot_url(&date.format("%Y-%m-%d").to_string()),
            base
        );

        let data = self.get_json(&url).await?;
        data.get(&base)
            .and_then(|rates| rates.get(&quote))
            .and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("No rate for {}->{} on {}", base, quote, date))
    }

    async fn currencies(&self) -> Result<Vec<String>> {
        let url = format!("{}/currencies.json", self.snapshot_url(LATEST));
        let data: HashMap<String, Value> = serde_json::from_value(self.get_json(&url).await?)
            .context("Currency list is not a JSON object")?;
        Ok(data.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(mock_server: &MockServer) -> CurrencyApiProvider {
        CurrencyApiProvider::new(
            &format!("{}/{{date}}/v1", mock_server.uri()),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_server = MockServer::start().await;
        let mock_response = r#"{"date": "2024-03-06", "usd": {"eur": 0.9213, "gbp": 0.787}}"#;

        Mock::given(method("GET"))
            .and(path("/2024-03-06/v1/currencies/usd.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        let rate = provider(&mock_server)
            .rate_on("USD", "EUR", day())
            .await
            .expect("Failed to get rate");
        assert_eq!(rate, 0.9213);
    }

    #[tokio::test]
    async fn test_missing_quote_in_payload() {
        let mock_server = MockServer::start().await;
        let mock_response = r#"{"date": "2024-03-06", "usd": {"gbp": 0.787}}"#;

        Mock::given(method("GET"))
            .and(path("/2024-03-06/v1/currencies/usd.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server).rate_on("USD", "EUR", day()).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "No rate for usd->eur on 2024-03-06"
        );
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024-03-06/v1/currencies/usd.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server).rate_on("USD", "EUR", day()).await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("HTTP error: 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2024-03-06/v1/currencies/usd.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let result = provider(&mock_server).rate_on("USD", "EUR", day()).await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response")
        );
    }

    #[tokio::test]
    async fn test_currency_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/latest/v1/currencies.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"usd": "US Dollar", "eur": "Euro", "inr": "Indian Rupee"}"#),
            )
            .mount(&mock_server)
            .await;

        let mut codes = provider(&mock_server).currencies().await.unwrap();
        codes.sort();
        assert_eq!(codes, vec!["eur", "inr", "usd"]);
    }
}
