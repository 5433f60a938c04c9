// crates/countrydb-core/src/search.rs
use crate::model::{CountryRecord, DEFAULT_LANGUAGE};
use crate::store::RecordStore;
use crate::text::{normalize, normalize_phone};
use crate::traits::NameMatch;
use serde::Serialize;

/// Names of one record in one language, as returned by
/// [`CountrySearch::filter_by_language`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LanguageNames<'a> {
    /// ISO2 code of the record.
    pub code: &'a str,
    pub names: &'a [String],
}

/// Exact and field-based lookups.
///
/// Every method is provided on top of [`CountrySearch::store`], so both a
/// bare [`RecordStore`] and a [`CountryDb`](crate::CountryDb) offer them.
/// Nothing here fails: an unknown code or name yields `None` or an empty
/// `Vec`, and a blank query never matches.
///
/// # Example
///
#[cfg_attr(feature = "json", doc = "```rust")]
#[cfg_attr(not(feature = "json"), doc = "```ignore")]
/// use countrydb_core::prelude::*;
///
/// let db = CountryDb::sample()?;
///
/// let lk = db.find_by_name("lanka").unwrap();
/// assert_eq!(lk.iso3(), "LKA");
///
/// let neighbours: Vec<&str> = db.neighbors("LK").iter().map(|c| c.iso3()).collect();
/// assert_eq!(neighbours, ["IND"]);
/// # Ok::<(), countrydb_core::CountryError>(())
/// ```
pub trait CountrySearch {
    fn store(&self) -> &RecordStore;

    /// Language used when a caller does not name one.
    fn default_language(&self) -> &str {
        DEFAULT_LANGUAGE
    }

    /// All records, in load order.
    fn countries(&self) -> &[CountryRecord] {
        self.store().all()
    }

    /// Find a record by ISO2 or ISO3 code (trimmed, case-insensitive, exact).
    fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.store().by_code(code)
    }

    fn is_valid_code(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// First record (in load order) with any name, in any language, that
    /// contains `name` after normalization.
    ///
    /// This is a partial match, not a ranked one: `"united"` returns whichever
    /// "United ..." country comes first.
    fn find_by_name(&self, name: &str) -> Option<&CountryRecord> {
        let q = normalize(name);
        if q.is_empty() {
            return None;
        }
        self.store().iter().find(|c| c.names_contain_normalized(&q))
    }

    /// ISO2 code of [`find_by_name`](CountrySearch::find_by_name).
    fn find_iso2(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(CountryRecord::iso2)
    }

    /// ISO3 code of [`find_by_name`](CountrySearch::find_by_name).
    fn find_iso3(&self, name: &str) -> Option<&str> {
        self.find_by_name(name).map(CountryRecord::iso3)
    }

    /// Every name variant in every language; empty for an unknown code.
    fn all_names(&self, code: &str) -> Vec<&str> {
        self.find_by_code(code)
            .map(|c| c.names.variants().collect())
            .unwrap_or_default()
    }

    /// `{code, names}` for every record in `lang` (default language when
    /// `None`). Records without `lang` report their default-language names.
    fn filter_by_language(&self, lang: Option<&str>) -> Vec<LanguageNames<'_>> {
        let fallback = self.default_language();
        let lang = lang.unwrap_or(fallback);
        self.store()
            .iter()
            .map(|c| LanguageNames {
                code: c.iso2(),
                names: c
                    .names
                    .get(lang)
                    .or_else(|| c.names.get(fallback))
                    .unwrap_or(&[]),
            })
            .collect()
    }

    /// First name variant in `lang`, without falling back to another language.
    fn name_in_language(&self, code: &str, lang: &str) -> Option<&str> {
        self.find_by_code(code).and_then(|c| c.names.primary(lang))
    }

    /// First record whose capital equals `capital` (normalized).
    fn find_by_capital(&self, capital: &str) -> Option<&CountryRecord> {
        let q = normalize(capital);
        if q.is_empty() {
            return None;
        }
        self.store()
            .iter()
            .find(|c| c.capital().is_some_and(|cap| normalize(cap) == q))
    }

    /// Records that list `language` among their spoken languages.
    fn find_by_language(&self, language: &str) -> Vec<&CountryRecord> {
        let q = normalize(language);
        if q.is_empty() {
            return Vec::new();
        }
        self.store()
            .iter()
            .filter(|c| c.languages().iter().any(|l| normalize(l) == q))
            .collect()
    }

    /// Records observing `timezone`, e.g. `"UTC+05:30"`. Exact match only.
    fn find_by_timezone(&self, timezone: &str) -> Vec<&CountryRecord> {
        let q = normalize(timezone);
        if q.is_empty() {
            return Vec::new();
        }
        self.store()
            .iter()
            .filter(|c| c.timezones().iter().any(|tz| normalize(tz) == q))
            .collect()
    }

    /// Records in `region` (e.g. `"Asia"`).
    fn find_by_region(&self, region: &str) -> Vec<&CountryRecord> {
        let q = normalize(region);
        if q.is_empty() {
            return Vec::new();
        }
        self.store()
            .iter()
            .filter(|c| c.region().is_some_and(|r| normalize(r) == q))
            .collect()
    }

    /// Records with phone code `phone`; a leading `+` is ignored (`"+94"` == `"94"`).
    fn find_by_phone_code(&self, phone: &str) -> Vec<&CountryRecord> {
        let q = normalize_phone(phone);
        if q.is_empty() {
            return Vec::new();
        }
        self.store()
            .iter()
            .filter(|c| c.phone_codes().any(|p| normalize_phone(p) == q))
            .collect()
    }

    /// Records using a currency whose code equals `input` or whose name
    /// contains it (`"USD"`, `"dollar"`).
    fn find_by_currency(&self, input: &str) -> Vec<&CountryRecord> {
        let q = normalize(input);
        if q.is_empty() {
            return Vec::new();
        }
        self.store()
            .iter()
            .filter(|c| {
                c.currencies().iter().any(|cur| {
                    cur.codes.iter().any(|code| normalize(code) == q)
                        || cur.names.iter().any(|name| normalize(name).contains(&q))
                })
            })
            .collect()
    }

    /// Bordering records. Borders naming codes outside the collection are
    /// skipped.
    fn neighbors(&self, code: &str) -> Vec<&CountryRecord> {
        let Some(country) = self.find_by_code(code) else {
            return Vec::new();
        };
        country
            .borders()
            .iter()
            .filter_map(|b| self.find_by_code(b))
            .collect()
    }

    fn demonym(&self, code: &str) -> Option<&str> {
        self.find_by_code(code).and_then(CountryRecord::demonym)
    }

    fn area(&self, code: &str) -> Option<f64> {
        self.find_by_code(code).and_then(CountryRecord::area)
    }

    fn population(&self, code: &str) -> Option<u64> {
        self.find_by_code(code).and_then(CountryRecord::population)
    }
}

impl CountrySearch for RecordStore {
    fn store(&self) -> &RecordStore {
        self
    }
}
