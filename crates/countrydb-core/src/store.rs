// crates/countrydb-core/src/store.rs
use crate::model::CountryRecord;
use crate::text::normalize_code;

/// The immutable record collection.
///
/// Records keep the order they were loaded in; every set query returns
/// results in this order. Nothing hands out `&mut` access, so indices built
/// over a store stay valid for as long as the store lives.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    /// Dataset identifier of each record, parallel to `records`.
    ids: Vec<String>,
    records: Vec<CountryRecord>,
}

impl RecordStore {
    /// Build a store from records constructed in code.
    ///
    /// Each record is identified by its ISO2 code.
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let pairs = records
            .into_iter()
            .map(|mut r| {
                canonicalize_codes(&mut r);
                (r.iso2.clone(), r)
            })
            .collect();
        Self::from_pairs(pairs)
    }

    /// Build a store from `(identifier, record)` pairs, as found in the dataset.
    pub fn from_keyed<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, CountryRecord)>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(id, mut r)| {
                canonicalize_codes(&mut r);
                (id, r)
            })
            .collect();
        Self::from_pairs(pairs)
    }

    fn from_pairs(pairs: Vec<(String, CountryRecord)>) -> Self {
        let (ids, records) = pairs.into_iter().unzip();
        Self { ids, records }
    }

    /// All records in load order.
    pub fn all(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by ISO2 or ISO3 code (trimmed, case-insensitive, exact).
    ///
    /// Examples:
    /// - "LK"  → matches ISO2
    /// - " lka " → matches ISO3
    /// - "L" → no match (no partial matching)
    pub fn by_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = normalize_code(code);
        if code.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.iso2 == code || r.iso3 == code)
    }

    /// Find a record by the identifier it was stored under.
    pub fn by_id(&self, id: &str) -> Option<&CountryRecord> {
        self.ids
            .iter()
            .position(|k| k == id)
            .map(|i| &self.records[i])
    }

    /// `(identifier, record)` pairs in load order.
    pub fn keyed(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.ids.iter().map(String::as_str).zip(self.records.iter())
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn canonicalize_codes(r: &mut CountryRecord) {
    r.iso2 = normalize_code(&r.iso2);
    r.iso3 = normalize_code(&r.iso3);
}
