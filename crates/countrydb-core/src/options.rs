// crates/countrydb-core/src/options.rs
use crate::model::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};

/// Normalized edit-distance ratio above which a fuzzy candidate is dropped.
///
/// Stricter than typical fuzzy-search defaults: country names are short
/// proper nouns and a loose threshold jumps between neighbouring countries.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;

/// Tunables for a [`CountryDb`](crate::CountryDb).
///
/// Deserializable so applications can keep it next to their own settings;
/// missing fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Language used when a caller does not name one, and the fallback for
    /// records that lack the requested language.
    pub default_language: String,
    /// Maximum `distance / max(len(query), len(name))` accepted by fuzzy search.
    pub fuzzy_threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl MatchOptions {
    pub fn with_default_language(mut self, lang: impl Into<String>) -> Self {
        self.default_language = lang.into();
        self
    }

    /// Threshold is clamped to `0.0..=0.9`; a ratio of 1.0 would accept anything.
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold.clamp(0.0, 0.9);
        self
    }
}
