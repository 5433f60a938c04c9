// crates/countrydb-core/src/model.rs
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Language tag used when a caller does not ask for a specific one.
pub const DEFAULT_LANGUAGE: &str = "ENG";

/// Field keys as they appear in the dataset (and in flexible queries).
pub mod keys {
    pub const ISO2_CODE: &str = "ISO2_CODE";
    pub const ISO3_CODE: &str = "ISO3_CODE";
    pub const LIST_OF_NAME: &str = "LIST_OF_NAME";
    pub const CURRENCY: &str = "CURRENCY";
    pub const REGION: &str = "REGION";
    pub const PHONE_CODE: &str = "PHONE_CODE";
    pub const CAPITAL: &str = "CAPITAL";
    pub const DEMONYM: &str = "DEMONYM";
    pub const LANGUAGES: &str = "LANGUAGES";
    pub const TIMEZONES: &str = "TIMEZONES";
    pub const BORDERS: &str = "BORDERS";
    pub const AREA: &str = "AREA";
    pub const POPULATION: &str = "POPULATION";
}

/// A JSON object read as a list of pairs, keeping document order.
///
/// The dataset relies on document order for both record order and language
/// order. Collecting pairs keeps it whatever `serde_json::Map` is backed by;
/// `Value` input additionally needs serde_json's `preserve_order` feature,
/// which the workspace enables.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Ordered<V>(pub(crate) Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, V>()? {
                    pairs.push((k, v));
                }
                Ok(Ordered(pairs))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

impl<V: Serialize> Serialize for Ordered<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Names of a country keyed by language tag, in dataset order.
///
/// The first name of each language is the canonical one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTable(Ordered<Vec<String>>);

impl NameTable {
    fn pairs(&self) -> &[(String, Vec<String>)] {
        &self.0 .0
    }

    /// Iterate `(language, names)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.pairs()
            .iter()
            .map(|(lang, names)| (lang.as_str(), names.as_slice()))
    }

    /// Names for a language tag. Exact key first, then ASCII case-insensitive.
    pub fn get(&self, lang: &str) -> Option<&[String]> {
        let lang = lang.trim();
        let pairs = self.pairs();
        pairs
            .iter()
            .find(|(k, _)| k == lang)
            .or_else(|| pairs.iter().find(|(k, _)| k.eq_ignore_ascii_case(lang)))
            .map(|(_, names)| names.as_slice())
    }

    /// Canonical (first) name for a language tag.
    pub fn primary(&self, lang: &str) -> Option<&str> {
        self.get(lang)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    /// Every name variant across every language, in dataset order.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.pairs()
            .iter()
            .flat_map(|(_, names)| names.iter().map(String::as_str))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.pairs().iter().map(|(lang, _)| lang.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

impl<L, N> FromIterator<(L, Vec<N>)> for NameTable
where
    L: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<N>)>>(iter: I) -> Self {
        NameTable(Ordered(
            iter.into_iter()
                .map(|(lang, names)| (lang.into(), names.into_iter().map(Into::into).collect()))
                .collect(),
        ))
    }
}

/// A currency used by a country, e.g. `{ CODE: ["USD", "USN"], NAME: ["US Dollar"] }`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "CODE", default)]
    pub codes: Vec<String>,
    #[serde(rename = "NAME", default)]
    pub names: Vec<String>,
    #[serde(rename = "SYMBOL", default, skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
}

/// Phone code(s): the dataset carries either a single string or a list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneCodes {
    One(String),
    Many(Vec<String>),
}

impl PhoneCodes {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let codes: &[String] = match self {
            PhoneCodes::One(code) => std::slice::from_ref(code),
            PhoneCodes::Many(codes) => codes,
        };
        codes.iter().map(String::as_str)
    }
}

/// A country record. Immutable once it sits inside a [`RecordStore`].
///
/// [`RecordStore`]: crate::store::RecordStore
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "ISO2_CODE")]
    pub iso2: String,
    #[serde(rename = "ISO3_CODE")]
    pub iso3: String,
    #[serde(rename = "LIST_OF_NAME", default)]
    pub names: NameTable,

    /// `None` when the dataset has no currency entry (not the same as empty).
    #[serde(rename = "CURRENCY", default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<Currency>>,
    #[serde(rename = "REGION", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "PHONE_CODE", default, skip_serializing_if = "Option::is_none")]
    pub phone_codes: Option<PhoneCodes>,
    #[serde(rename = "CAPITAL", default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(rename = "DEMONYM", default, skip_serializing_if = "Option::is_none")]
    pub demonym: Option<String>,
    #[serde(rename = "LANGUAGES", default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// `UTC±HH:MM` offsets.
    #[serde(rename = "TIMEZONES", default, skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    /// ISO3 codes of neighbouring countries. May name codes outside the collection.
    #[serde(rename = "BORDERS", default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(rename = "AREA", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(rename = "POPULATION", default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,

    /// Fields this crate does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CountryRecord {
    pub fn iso2(&self) -> &str {
        &self.iso2
    }

    pub fn iso3(&self) -> &str {
        &self.iso3
    }

    /// Canonical name in the default language, or the first name found.
    pub fn name(&self) -> &str {
        self.names
            .primary(DEFAULT_LANGUAGE)
            .or_else(|| self.names.variants().next())
            .unwrap_or("")
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn currencies(&self) -> &[Currency] {
        self.currencies.as_deref().unwrap_or(&[])
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn phone_codes(&self) -> impl Iterator<Item = &str> {
        self.phone_codes.iter().flat_map(PhoneCodes::iter)
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn demonym(&self) -> Option<&str> {
        self.demonym.as_deref()
    }

    pub fn languages(&self) -> &[String] {
        self.languages.as_deref().unwrap_or(&[])
    }

    pub fn timezones(&self) -> &[String] {
        self.timezones.as_deref().unwrap_or(&[])
    }

    pub fn borders(&self) -> &[String] {
        self.borders.as_deref().unwrap_or(&[])
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn population(&self) -> Option<u64> {
        self.population
    }

    /// Read-only access to an unmodeled field.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// The value stored under a dataset key, as JSON. `None` when absent.
    ///
    /// Modeled fields are projected back to their dataset shape; any other
    /// key is looked up among the extension fields.
    pub fn field_value(&self, key: &str) -> Option<Value> {
        fn json<T: Serialize>(v: &T) -> Option<Value> {
            serde_json::to_value(v).ok()
        }

        match key {
            keys::ISO2_CODE => Some(Value::String(self.iso2.clone())),
            keys::ISO3_CODE => Some(Value::String(self.iso3.clone())),
            keys::LIST_OF_NAME => json(&self.names),
            keys::CURRENCY => self.currencies.as_ref().and_then(json),
            keys::REGION => self.region.clone().map(Value::String),
            keys::PHONE_CODE => self.phone_codes.as_ref().and_then(json),
            keys::CAPITAL => self.capital.clone().map(Value::String),
            keys::DEMONYM => self.demonym.clone().map(Value::String),
            keys::LANGUAGES => self.languages.as_ref().and_then(json),
            keys::TIMEZONES => self.timezones.as_ref().and_then(json),
            keys::BORDERS => self.borders.as_ref().and_then(json),
            keys::AREA => self.area.and_then(|a| json(&a)),
            keys::POPULATION => self.population.map(Value::from),
            other => self.extra.get(other).cloned(),
        }
    }
}
