//! Reference datasets: economic indicators per residence country and wealth
//! ladders per target country. Loaded once, read-only afterwards.

use crate::core::error::{Result, WealthError};
use crate::core::registry::COUNTRIES;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

pub const KEY_COLUMN: &str = "Country Code";
pub const PPP_COLUMN: &str = "PPP";
pub const CPI_COLUMN: &str = "CPI";
pub const CURRENCY_COLUMN: &str = "Currency";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: String,
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicIndicators {
    /// PPP conversion factor, always > 0.
    pub ppp: f64,
    /// CPI expressed as a percentage.
    pub cpi: f64,
}

#[derive(Debug, Default)]
pub struct ReferenceDataStore {
    countries: HashMap<String, CountryRecord>,
    indicators: HashMap<String, EconomicIndicators>,
    residence_order: Vec<String>,
    ladders: HashMap<String, Vec<f64>>,
    target_order: Vec<String>,
}

impl ReferenceDataStore {
    pub fn load(indicators_path: &Path, ladders_path: &Path) -> Result<Self> {
        let indicators = open(indicators_path)?;
        let ladders = open(ladders_path)?;
        let store = Self::from_readers(
            indicators,
            &indicators_path.display().to_string(),
            ladders,
            &ladders_path.display().to_string(),
        )?;
        info!(
            residence = store.residence_order.len(),
            targets = store.target_order.len(),
            "Loaded reference datasets"
        );
        Ok(store)
    }

    pub fn from_readers<I: Read, L: Read>(
        indicators: I,
        indicators_name: &str,
        ladders: L,
        ladders_name: &str,
    ) -> Result<Self> {
        let mut store = ReferenceDataStore::default();
        let mut currency_overrides = HashMap::new();
        store.load_indicators(indicators, indicators_name, &mut currency_overrides)?;
        store.load_ladders(ladders, ladders_name)?;

        for entry in COUNTRIES {
            let currency = currency_overrides
                .get(entry.alpha2)
                .cloned()
                .or_else(|| entry.currency.map(str::to_string));
            if let Some(currency) = currency {
                store.countries.insert(
                    entry.alpha2.to_string(),
                    CountryRecord {
                        code: entry.alpha2.to_string(),
                        name: entry.name.to_string(),
                        currency,
                    },
                );
            }
        }
        Ok(store)
    }

    fn load_indicators<R: Read>(
        &mut self,
        reader: R,
        name: &str,
        currency_overrides: &mut HashMap<String, String>,
    ) -> Result<()> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = headers(&mut reader, name)?;
        let key_idx = required_column(&headers, KEY_COLUMN, name)?;
        let ppp_idx = required_column(&headers, PPP_COLUMN, name)?;
        let cpi_idx = required_column(&headers, CPI_COLUMN, name)?;
        let currency_idx = column(&headers, CURRENCY_COLUMN);

        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| malformed(name, format!("line {}: {e}", line + 2)))?;
            let Some(code) = record.get(key_idx).and_then(normalize_code) else {
                continue;
            };
            let (Some(ppp), Some(cpi)) = (parse_cell(&record, ppp_idx), parse_cell(&record, cpi_idx))
            else {
                warn!(%code, "Skipping indicator row with missing PPP or CPI");
                continue;
            };
            if ppp <= 0.0 {
                warn!(%code, ppp, "Skipping indicator row with non-positive PPP");
                continue;
            }
            if cpi <= -100.0 {
                warn!(%code, cpi, "Skipping indicator row with CPI at or below -100");
                continue;
            }
            if self.indicators.contains_key(&code) {
                warn!(%code, "Duplicate indicator row ignored");
                continue;
            }
            if let Some(cur) = currency_idx
                .and_then(|idx| record.get(idx))
                .map(str::trim)
                .filter(|c| !c.is_empty())
            {
                currency_overrides.insert(code.clone(), cur.to_uppercase());
            }
            self.indicators
                .insert(code.clone(), EconomicIndicators { ppp, cpi });
            self.residence_order.push(code);
        }
        debug!(rows = self.residence_order.len(), "Indexed indicator rows");
        Ok(())
    }

    fn load_ladders<R: Read>(&mut self, reader: R, name: &str) -> Result<()> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = headers(&mut reader, name)?;
        let key = required_column(&headers, KEY_COLUMN, name)?;

        let mut bands: Vec<(u32, usize)> = headers
            .iter()
            .enumerate()
            .filter_map(|(idx, header)| band_lower_bound(header).map(|lo| (lo, idx)))
            .collect();
        if bands.is_empty() {
            return Err(malformed(name, "no percentile band columns"));
        }
        bands.sort_by_key(|(lo, _)| *lo);

        for (line, record) in reader.records().enumerate() {
            let line = line + 2;
            let record = record.map_err(|e| malformed(name, format!("line {line}: {e}")))?;
            let Some(code) = record.get(key).and_then(normalize_code) else {
                continue;
            };

            let mut thresholds = Vec::with_capacity(bands.len());
            let mut bad_cell = None;
            for (_, idx) in &bands {
                let cell = record.get(*idx).unwrap_or("").trim();
                if cell.is_empty() {
                    continue;
                }
                match cell.parse::<f64>() {
                    Ok(value) if value.is_finite() => thresholds.push(value),
                    _ => {
                        bad_cell = Some(cell);
                        break;
                    }
                }
            }
            if let Some(cell) = bad_cell {
                warn!(%code, line, cell, "Skipping ladder with invalid threshold");
                continue;
            }
            if thresholds.windows(2).any(|w| w[1] < w[0]) {
                warn!(%code, "Skipping ladder with decreasing thresholds");
                continue;
            }
            if self.ladders.contains_key(&code) {
                warn!(%code, "Duplicate ladder row ignored");
                continue;
            }
            self.ladders.insert(code.clone(), thresholds);
            self.target_order.push(code);
        }
        debug!(rows = self.target_order.len(), "Indexed ladder rows");
        Ok(())
    }

    pub fn indicators_for(&self, code: &str) -> Result<EconomicIndicators> {
        self.indicators
            .get(code)
            .copied()
            .ok_or_else(|| WealthError::NotFound {
                dataset: "indicator",
                code: code.to_string(),
            })
    }

    pub fn thresholds_for(&self, code: &str) -> Result<&[f64]> {
        self.ladders
            .get(code)
            .map(Vec::as_slice)
            .ok_or_else(|| WealthError::NotFound {
                dataset: "wealth ladder",
                code: code.to_string(),
            })
    }

    pub fn country(&self, code: &str) -> Result<&CountryRecord> {
        self.countries.get(code).ok_or_else(|| WealthError::NotFound {
            dataset: "country",
            code: code.to_string(),
        })
    }

    pub fn official_currency(&self, code: &str) -> Result<&str> {
        self.country(code).map(|record| record.currency.as_str())
    }

    /// Residence codes in indicator row order.
    pub fn all_residence_codes(&self) -> impl Iterator<Item = &str> {
        self.residence_order.iter().map(String::as_str)
    }

    /// Target codes in ladder row order.
    pub fn all_target_codes(&self) -> impl Iterator<Item = &str> {
        self.target_order.iter().map(String::as_str)
    }
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| {
        WealthError::UpstreamUnavailable(format!("Failed to open dataset {}: {e}", path.display()))
    })
}

fn malformed(name: &str, reason: impl Into<String>) -> WealthError {
    WealthError::Dataset {
        path: name.to_string(),
        reason: reason.into(),
    }
}

fn headers<R: Read>(reader: &mut csv::Reader<R>, name: &str) -> Result<StringRecord> {
    reader
        .headers()
        .cloned()
        .map_err(|e| malformed(name, format!("unreadable header: {e}")))
}

fn column(headers: &StringRecord, wanted: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == wanted)
}

fn required_column(headers: &StringRecord, wanted: &str, name: &str) -> Result<usize> {
    column(headers, wanted).ok_or_else(|| malformed(name, format!("missing column {wanted:?}")))
}

fn parse_cell(record: &StringRecord, idx: usize) -> Option<f64> {
    record
        .get(idx)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .and_then(|cell| cell.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Accepts `XX` or `XX (CUR)` and returns the upper-cased alpha-2 part.
fn normalize_code(raw: &str) -> Option<String> {
    let code = raw.trim().split(['(', ' ']).next().unwrap_or("").trim();
    (!code.is_empty()).then(|| code.to_uppercase())
}

/// Lower bound of a `p<lo>p<hi>` band header.
fn band_lower_bound(header: &str) -> Option<u32> {
    let rest = header.trim().strip_prefix('p')?;
    let (lo, hi) = rest.split_once('p')?;
    hi.parse::<f64>().ok()?;
    lo.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDICATORS: &str = "\
Country Code,Country Name,PPP,CPI
FR,France,1.2,5
US,United States,1.0,3.1
DE,Germany,,2.0
IN,India,0,4
";

    const LADDERS: &str = "\
Country Code,p1p2,p0p1,p2p3,note
US (USD),200,100,300,x
FR (EUR),150,50,,
ZZ,,,,
";

    fn store() -> ReferenceDataStore {
        ReferenceDataStore::from_readers(
            INDICATORS.as_bytes(),
            "combined.csv",
            LADDERS.as_bytes(),
            "wealth_ladders.csv",
        )
        .unwrap()
    }

    #[test]
    fn test_indicators_lookup() {
        let store = store();
        assert_eq!(
            store.indicators_for("FR").unwrap(),
            EconomicIndicators { ppp: 1.2, cpi: 5.0 }
        );
        // Blank PPP and non-positive PPP rows are treated as missing
        assert!(matches!(
            store.indicators_for("DE"),
            Err(WealthError::NotFound { .. })
        ));
        assert!(store.indicators_for("IN").is_err());
        assert_eq!(store.all_residence_codes().collect::<Vec<_>>(), vec!["FR", "US"]);
    }

    #[test]
    fn test_ladders_ordered_by_band() {
        let store = store();
        assert_eq!(store.thresholds_for("US").unwrap(), &[100.0, 200.0, 300.0]);
        assert_eq!(store.thresholds_for("FR").unwrap(), &[50.0, 150.0]);
        assert!(store.thresholds_for("ZZ").unwrap().is_empty());
        assert!(matches!(
            store.thresholds_for("JP"),
            Err(WealthError::NotFound { .. })
        ));
        assert_eq!(
            store.all_target_codes().collect::<Vec<_>>(),
            vec!["US", "FR", "ZZ"]
        );
    }

    #[test]
    fn test_official_currency_from_registry_and_override() {
        let indicators = "Country Code,PPP,CPI,Currency\nFR,1.2,5,\nZW,3.0,100,usd\n";
        let store = ReferenceDataStore::from_readers(
            indicators.as_bytes(),
            "combined.csv",
            LADDERS.as_bytes(),
            "wealth_ladders.csv",
        )
        .unwrap();
        assert_eq!(store.official_currency("FR").unwrap(), "EUR");
        assert_eq!(store.official_currency("ZW").unwrap(), "USD");
        assert_eq!(store.country("FR").unwrap().name, "France");
        assert!(store.official_currency("AQ").is_err());
    }

    #[test]
    fn test_missing_key_column_is_fatal() {
        let result = ReferenceDataStore::from_readers(
            "Code,PPP,CPI\nFR,1,1\n".as_bytes(),
            "combined.csv",
            LADDERS.as_bytes(),
            "wealth_ladders.csv",
        );
        let err = result.unwrap_err();
        assert_eq!(
            err,
            WealthError::Dataset {
                path: "combined.csv".to_string(),
                reason: "missing column \"Country Code\"".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_value_columns_are_fatal() {
        let missing_cpi = ReferenceDataStore::from_readers(
            "Country Code,PPP\nFR,1\n".as_bytes(),
            "combined.csv",
            LADDERS.as_bytes(),
            "wealth_ladders.csv",
        );
        assert!(matches!(missing_cpi, Err(WealthError::Dataset { .. })));

        let no_bands = ReferenceDataStore::from_readers(
            INDICATORS.as_bytes(),
            "combined.csv",
            "Country Code,total\nUS,1\n".as_bytes(),
            "wealth_ladders.csv",
        );
        assert!(matches!(no_bands, Err(WealthError::Dataset { .. })));
    }

    #[test]
    fn test_invalid_threshold_skips_only_that_row() {
        let ladders = "Country Code,p0p1,p1p2,p2p3\n\
                       US,10,NaN,30\n\
                       FR,abc,20,30\n\
                       GB,10,inf,30\n\
                       DE,1,2,3\n";
        let store = ReferenceDataStore::from_readers(
            INDICATORS.as_bytes(),
            "combined.csv",
            ladders.as_bytes(),
            "wealth_ladders.csv",
        )
        .unwrap();

        assert_eq!(store.all_target_codes().collect::<Vec<_>>(), vec!["DE"]);
        assert_eq!(store.thresholds_for("DE").unwrap(), &[1.0, 2.0, 3.0]);
        assert!(matches!(
            store.thresholds_for("US"),
            Err(WealthError::NotFound { .. })
        ));
    }

    #[test]
    fn test_cpi_at_or_below_minus_hundred_is_skipped() {
        let indicators = "Country Code,PPP,CPI\nFR,1.2,-100\nDE,0.8,-150\nUS,1.0,-2.5\n";
        let store = ReferenceDataStore::from_readers(
            indicators.as_bytes(),
            "combined.csv",
            LADDERS.as_bytes(),
            "wealth_ladders.csv",
        )
        .unwrap();

        assert_eq!(store.all_residence_codes().collect::<Vec<_>>(), vec!["US"]);
        assert_eq!(store.indicators_for("US").unwrap().cpi, -2.5);
        assert!(store.indicators_for("FR").is_err());
    }

    #[test]
    fn test_missing_file_fails_load() {
        let result = ReferenceDataStore::load(
            Path::new("/nonexistent/combined.csv"),
            Path::new("/nonexistent/wealth_ladders.csv"),
        );
        assert!(matches!(result, Err(WealthError::UpstreamUnavailable(_))));
    }

    #[test]
    fn test_band_header_parsing() {
        assert_eq!(band_lower_bound("p0p1"), Some(0));
        assert_eq!(band_lower_bound("p99p100"), Some(99));
        assert_eq!(band_lower_bound("p99.9p100"), None);
        assert_eq!(band_lower_bound("Country Code"), None);
        assert_eq!(normalize_code(" us (USD)"), Some("US".to_string()));
        assert_eq!(normalize_code(""), None);
    }
}
