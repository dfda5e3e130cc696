//! Resolution of free-text country identifiers to alpha-2 codes.

use crate::core::cache::Memo;
use crate::core::error::{Result, WealthError};
use crate::core::registry::{COMMON_NAMES, COUNTRIES, Continent, CountryEntry, OFFICIAL_NAMES};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Lookup strategies, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Alpha2,
    Alpha3,
    Name,
    CommonName,
    OfficialName,
}

impl MatchStrategy {
    pub const ORDER: [MatchStrategy; 5] = [
        MatchStrategy::Alpha2,
        MatchStrategy::Alpha3,
        MatchStrategy::Name,
        MatchStrategy::CommonName,
        MatchStrategy::OfficialName,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found {
        alpha2: &'static str,
        strategy: MatchStrategy,
    },
    NotFound,
}

pub struct CountryCodeResolver {
    by_alpha2: HashMap<&'static str, &'static CountryEntry>,
    indexes: Vec<(MatchStrategy, HashMap<String, &'static str>)>,
    common_names: HashMap<&'static str, &'static str>,
    resolved: Memo<String, Resolution>,
    display_names: Memo<String, &'static str>,
    continents: Memo<String, Option<Continent>>,
}

impl CountryCodeResolver {
    pub fn new() -> Self {
        let by_alpha2 = COUNTRIES.iter().map(|c| (c.alpha2, c)).collect();
        let lowered = |pairs: &mut dyn Iterator<Item = (&'static str, &'static str)>| {
            pairs
                .map(|(key, alpha2)| (key.to_lowercase(), alpha2))
                .collect::<HashMap<_, _>>()
        };

        let indexes = MatchStrategy::ORDER
            .iter()
            .map(|strategy| {
                let index = match strategy {
                    MatchStrategy::Alpha2 => {
                        lowered(&mut COUNTRIES.iter().map(|c| (c.alpha2, c.alpha2)))
                    }
                    MatchStrategy::Alpha3 => {
                        lowered(&mut COUNTRIES.iter().map(|c| (c.alpha3, c.alpha2)))
                    }
                    MatchStrategy::Name => lowered(&mut COUNTRIES.iter().map(|c| (c.name, c.alpha2))),
                    MatchStrategy::CommonName => {
                        lowered(&mut COMMON_NAMES.iter().map(|(code, name)| (*name, *code)))
                    }
                    MatchStrategy::OfficialName => {
                        lowered(&mut OFFICIAL_NAMES.iter().map(|(code, name)| (*name, *code)))
                    }
                };
                (*strategy, index)
            })
            .collect();

        Self {
            by_alpha2,
            indexes,
            common_names: COMMON_NAMES.iter().copied().collect(),
            resolved: Memo::new(),
            display_names: Memo::new(),
            continents: Memo::new(),
        }
    }

    /// Runs the fixed strategy chain against a name or code.
    pub fn lookup(&self, name_or_code: &str) -> Resolution {
        let key = name_or_code.trim().to_lowercase();
        self.resolved
            .get_or_try_insert_with(&key, || {
                self.indexes.iter().find_map(|(strategy, index)| {
                    index.get(&key).map(|alpha2| Resolution::Found {
                        alpha2: *alpha2,
                        strategy: *strategy,
                    })
                })
            })
            .unwrap_or(Resolution::NotFound)
    }

    pub fn resolve_to_alpha2(&self, name_or_code: &str) -> Result<&'static str> {
        match self.lookup(name_or_code) {
            Resolution::Found { alpha2, strategy } => {
                debug!(input = %name_or_code, %alpha2, ?strategy, "Resolved country");
                Ok(alpha2)
            }
            Resolution::NotFound => Err(WealthError::UnknownCountry(name_or_code.to_string())),
        }
    }

    /// Common name when one exists, registry name otherwise.
    pub fn alpha2_to_display_name(&self, code: &str) -> Result<&'static str> {
        let key = code.trim().to_uppercase();
        self.display_names
            .get_or_try_insert_with(&key, || {
                self.by_alpha2.get(key.as_str()).map(|entry| {
                    self.common_names
                        .get(entry.alpha2)
                        .copied()
                        .unwrap_or(entry.name)
                })
            })
            .ok_or_else(|| WealthError::UnknownCode(code.to_string()))
    }

    pub fn continent_of(&self, code: &str) -> Option<Continent> {
        let key = code.trim().to_uppercase();
        self.continents.get_or_insert_with(&key, || {
            self.by_alpha2
                .get(key.as_str())
                .and_then(|entry| entry.continent_code)
                .and_then(Continent::from_code)
        })
    }

    /// Groups codes by continent with display names sorted per continent.
    /// Codes without a continent or registry entry are dropped.
    pub fn group_by_continent<'a>(
        &self,
        codes: impl IntoIterator<Item = &'a str>,
    ) -> BTreeMap<Continent, Vec<String>> {
        let mut groups: BTreeMap<Continent, Vec<String>> = BTreeMap::new();
        for code in codes {
            let (Some(continent), Ok(name)) =
                (self.continent_of(code), self.alpha2_to_display_name(code))
            else {
                debug!(%code, "Dropping country without continent mapping");
                continue;
            };
            groups.entry(continent).or_default().push(name.to_string());
        }
        for names in groups.values_mut() {
            names.sort();
            names.dedup();
        }
        groups
    }
}

impl Default for CountryCodeResolver {
    fn default() -> Self {
        Self::new()
    }
}
