//! Per-request coordination: resolve the residence country, normalize once,
//! then rank the figure against every target ladder independently.

use crate::core::currency::CurrencyRateProvider;
use crate::core::error::{Result, WealthError};
use crate::core::normalizer::{NormalizedWealth, WealthNormalizer};
use crate::core::percentile::match_percentile;
use crate::core::reference::ReferenceDataStore;
use crate::core::registry::Continent;
use crate::core::resolver::CountryCodeResolver;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    pub currency: String,
    #[serde(default)]
    pub net_worth: Value,
    pub residence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub target_country: String,
    pub target_code: String,
    pub wealth_percentile: usize,
    pub wealth_threshold: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTarget {
    pub code: String,
    pub reason: WealthError,
}

#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    pub residence_code: String,
    pub normalized: NormalizedWealth,
    /// In target dataset row order.
    pub results: Vec<ComparisonResult>,
    pub skipped: Vec<SkippedTarget>,
}

pub type CountryGroups = BTreeMap<Continent, Vec<String>>;

pub struct ComparisonService {
    store: Arc<ReferenceDataStore>,
    resolver: Arc<CountryCodeResolver>,
    rates: Arc<dyn CurrencyRateProvider>,
    normalizer: WealthNormalizer,
}

impl ComparisonService {
    pub fn new(
        store: Arc<ReferenceDataStore>,
        resolver: Arc<CountryCodeResolver>,
        rates: Arc<dyn CurrencyRateProvider>,
    ) -> Self {
        let normalizer = WealthNormalizer::new(Arc::clone(&store), Arc::clone(&rates));
        Self {
            store,
            resolver,
            rates,
            normalizer,
        }
    }

    /// Input and setup failures abort the whole comparison; failures for a
    /// single target only drop that target.
    #[instrument(name = "Compare", skip(self, request), fields(residence = %request.residence))]
    pub async fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonOutcome> {
        let residence_code = self.resolver.resolve_to_alpha2(&request.residence)?;
        let normalized = self
            .normalizer
            .to_international_dollars(&request.net_worth, &request.currency, residence_code)
            .await?;

        let (results, skipped) = self.rank_against_targets(normalized.international_net_worth);
        for target in &skipped {
            warn!(code = %target.code, reason = %target.reason, "Skipped target country");
        }
        info!(
            matched = results.len(),
            skipped = skipped.len(),
            "Comparison complete"
        );

        Ok(ComparisonOutcome {
            residence_code: residence_code.to_string(),
            normalized,
            results,
            skipped,
        })
    }

    fn rank_against_targets(&self, value: f64) -> (Vec<ComparisonResult>, Vec<SkippedTarget>) {
        self.store.all_target_codes().fold(
            (Vec::new(), Vec::new()),
            |(mut results, mut skipped), code| {
                match self.rank_against(code, value) {
                    Ok(result) => results.push(result),
                    Err(reason) => skipped.push(SkippedTarget {
                        code: code.to_string(),
                        reason,
                    }),
                }
                (results, skipped)
            },
        )
    }

    fn rank_against(&self, code: &str, value: f64) -> Result<ComparisonResult> {
        let thresholds = self.store.thresholds_for(code)?;
        let matched = match_percentile(value, thresholds)?;
        let name = self.resolver.alpha2_to_display_name(code)?;
        Ok(ComparisonResult {
            target_country: name.to_string(),
            target_code: code.to_string(),
            wealth_percentile: matched.percentile,
            wealth_threshold: matched.threshold,
        })
    }

    /// Indicator countries whose official currency the rate backend quotes.
    pub async fn residence_countries(&self) -> Result<CountryGroups> {
        let supported = self.rates.supported_currencies().await?;
        let codes = self.store.all_residence_codes().filter(|code| {
            self.store
                .official_currency(code)
                .is_ok_and(|currency| supported.contains(currency))
        });
        Ok(self.resolver.group_by_continent(codes))
    }

    pub fn target_countries(&self) -> CountryGroups {
        self.resolver.group_by_continent(self.store.all_target_codes())
    }
}
