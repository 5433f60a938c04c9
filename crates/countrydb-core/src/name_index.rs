// crates/countrydb-core/src/name_index.rs
use crate::store::RecordStore;
use tracing::debug;

/// One `(record, language, name variant)` triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameIndexEntry {
    pub name: String,
    pub language: String,
    pub owner_iso2: String,
    pub owner_iso3: String,
}

/// Every name of every record in every language, flattened.
///
/// Order is record order, then language order, then variant order; fuzzy
/// search breaks ties on this order. Built once per [`CountryDb`] because the
/// store never changes.
///
/// [`CountryDb`]: crate::CountryDb
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    entries: Vec<NameIndexEntry>,
}

impl NameIndex {
    pub fn build(store: &RecordStore) -> Self {
        let entries: Vec<NameIndexEntry> = store
            .iter()
            .flat_map(|record| {
                record.names.iter().flat_map(move |(lang, names)| {
                    names.iter().map(move |name| NameIndexEntry {
                        name: name.clone(),
                        language: lang.to_string(),
                        owner_iso2: record.iso2.clone(),
                        owner_iso3: record.iso3.clone(),
                    })
                })
            })
            .collect();

        debug!(
            records = store.len(),
            entries = entries.len(),
            "built country name index"
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[NameIndexEntry] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&NameIndexEntry> {
        self.entries.get(idx)
    }

    /// Entries of one language (ASCII case-insensitive tag), in index order.
    pub fn in_language<'a>(&'a self, lang: &'a str) -> impl Iterator<Item = &'a NameIndexEntry> {
        let lang = lang.trim();
        self.entries
            .iter()
            .filter(move |e| e.language.eq_ignore_ascii_case(lang))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_record_then_language_order() {
        let store = RecordStore::sample().unwrap();
        let index = NameIndex::build(&store);

        let first: Vec<(&str, &str)> = index
            .entries()
            .iter()
            .take(5)
            .map(|e| (e.name.as_str(), e.language.as_str()))
            .collect();
        assert_eq!(
            first,
            [
                ("Sri Lanka", "ENG"),
                ("Democratic Socialist Republic of Sri Lanka", "ENG"),
                ("Ceylon", "ENG"),
                ("ශ්‍රී ලංකාව", "SIN"),
                ("இலங்கை", "TAM"),
            ]
        );
        assert!(index.entries()[..5].iter().all(|e| e.owner_iso3 == "LKA"));
    }

    #[test]
    fn one_entry_per_name_variant() {
        let store = RecordStore::sample().unwrap();
        let index = NameIndex::build(&store);
        let expected: usize = store.iter().map(|r| r.names.variants().count()).sum();
        assert_eq!(index.len(), expected);
    }

    #[test]
    fn language_filter_ignores_case() {
        let store = RecordStore::sample().unwrap();
        let index = NameIndex::build(&store);
        let owners: Vec<&str> = index.in_language("deu").map(|e| e.owner_iso2.as_str()).collect();
        assert_eq!(owners, ["DE", "DE", "CH"]);
    }
}
