// crates/countrydb-core/src/db.rs
use crate::error::Result;
use crate::fuzzy::FuzzyMatcher;
use crate::model::CountryRecord;
use crate::name_index::NameIndex;
use crate::options::MatchOptions;
use crate::query::FlexibleQuery;
use crate::search::CountrySearch;
use crate::store::RecordStore;
use crate::text::normalize;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

/// The country database: a [`RecordStore`] plus the lazily-built indices
/// for fuzzy search and autocomplete.
///
/// Exact lookups come from the [`CountrySearch`] trait; approximate and
/// flexible lookups are inherent methods.
///
/// # Example
///
#[cfg_attr(all(feature = "json", feature = "fuzzy"), doc = "```rust")]
#[cfg_attr(not(all(feature = "json", feature = "fuzzy")), doc = "```ignore")]
/// use countrydb_core::prelude::*;
/// use serde_json::json;
///
/// let db = CountryDb::sample()?;
///
/// assert_eq!(db.fuzzy_find("Sr Lanka")?.map(|c| c.iso3()), Some("LKA"));
///
/// let usd: Vec<&str> = db
///     .find_flexible(&FlexibleQuery::from(json!({ "CURRENCY.CODE": "USD" })))
///     .iter()
///     .map(|c| c.iso2())
///     .collect();
/// assert_eq!(usd, ["US", "EC"]);
/// # Ok::<(), countrydb_core::CountryError>(())
/// ```
#[derive(Debug)]
pub struct CountryDb {
    store: RecordStore,
    options: MatchOptions,
    names: OnceCell<NameIndex>,
    fuzzy: FuzzyMatcher,
}

impl CountryDb {
    pub fn new(store: RecordStore) -> Self {
        Self::with_options(store, MatchOptions::default())
    }

    pub fn with_options(store: RecordStore, options: MatchOptions) -> Self {
        let fuzzy = FuzzyMatcher::new(options.fuzzy_threshold);
        Self {
            store,
            options,
            names: OnceCell::new(),
            fuzzy,
        }
    }

    /// Database over the bundled sample dataset.
    #[cfg(feature = "json")]
    pub fn sample() -> Result<Self> {
        RecordStore::sample().map(Self::new)
    }

    /// Database over a dataset file (see [`RecordStore::load_from_path`]).
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        RecordStore::load_from_path(path).map(Self::new)
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// The flattened name index, built on first use.
    pub fn name_index(&self) -> &NameIndex {
        self.names.get_or_init(|| NameIndex::build(&self.store))
    }

    pub fn is_fuzzy_index_built(&self) -> bool {
        self.fuzzy.is_built()
    }

    /// Closest record by name, tolerating small spelling mistakes.
    ///
    /// Blank input returns `Ok(None)` without building any index. Fails with
    /// [`CountryError::MissingCapability`] when the crate was built without
    /// the `fuzzy` feature.
    ///
    /// [`CountryError::MissingCapability`]: crate::CountryError::MissingCapability
    pub fn fuzzy_find(&self, name: &str) -> Result<Option<&CountryRecord>> {
        if normalize(name).is_empty() {
            return Ok(None);
        }
        let names = self.name_index();
        let hit = self.fuzzy.best_match(names, name)?;
        Ok(hit
            .and_then(|h| names.get(h.entry))
            .and_then(|entry| self.store.by_code(&entry.owner_iso3)))
    }

    /// Records satisfying every predicate of `query`, in load order.
    pub fn find_flexible(&self, query: &FlexibleQuery) -> Vec<&CountryRecord> {
        self.store.iter().filter(|c| query.matches(c)).collect()
    }

    /// Records with a name in `lang` (default language when `None`) starting
    /// with `partial`, in name index order, each record at most once.
    pub fn autocomplete(&self, partial: &str, lang: Option<&str>) -> Vec<&CountryRecord> {
        let q = normalize(partial);
        if q.is_empty() {
            return Vec::new();
        }
        let lang = lang.unwrap_or(&self.options.default_language);

        let mut seen = HashSet::new();
        self.name_index()
            .in_language(lang)
            .filter(|e| normalize(&e.name).starts_with(&q))
            .filter(|e| seen.insert(e.owner_iso3.as_str()))
            .filter_map(|e| self.store.by_code(&e.owner_iso3))
            .collect()
    }
}

impl CountrySearch for CountryDb {
    fn store(&self) -> &RecordStore {
        &self.store
    }

    fn default_language(&self) -> &str {
        &self.options.default_language
    }
}

impl From<RecordStore> for CountryDb {
    fn from(store: RecordStore) -> Self {
        Self::new(store)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn name_index_is_built_once() {
        let db = CountryDb::sample().unwrap();
        let a = db.name_index() as *const NameIndex;
        let b = db.name_index() as *const NameIndex;
        assert_eq!(a, b);
    }

    #[test]
    fn autocomplete_dedupes_by_owner() {
        let db = CountryDb::sample().unwrap();
        // "United States" and "United States of America" both belong to USA
        let hits: Vec<&str> = db.autocomplete("united", None).iter().map(|c| c.iso3()).collect();
        assert_eq!(hits, ["USA", "GBR"]);
    }

    #[test]
    fn autocomplete_respects_language() {
        let db = CountryDb::sample().unwrap();
        let hits: Vec<&str> = db.autocomplete("sch", Some("DEU")).iter().map(|c| c.iso2()).collect();
        assert_eq!(hits, ["CH"]);
        assert!(db.autocomplete("sch", None).is_empty());
        assert!(db.autocomplete("  ", None).is_empty());
    }

    #[test]
    fn custom_default_language_drives_fallbacks() {
        let store = RecordStore::sample().unwrap();
        let db = CountryDb::with_options(store, MatchOptions::default().with_default_language("DEU"));
        let hits: Vec<&str> = db.autocomplete("deutsch", None).iter().map(|c| c.iso2()).collect();
        assert_eq!(hits, ["DE"]);
    }
}
