// crates/countrydb-core/src/query.rs

//! Flexible multi-field queries.
//!
//! A query is a list of predicates combined with logical AND. Keys are
//! either a dataset field name (`"ISO2_CODE"`, `"REGION"`, ...) or a dotted
//! path `"<CONTAINER>.<SUBFIELD>"` into a list of objects, e.g.
//! `"CURRENCY.CODE"`.
//!
//! Unlike name search, values here are compared strictly: no trimming, no
//! case folding, no partial matches.

use crate::model::CountryRecord;
use serde_json::Value;

/// A single parsed predicate.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// `field` is present, truthy, and equal to `value`.
    Direct { field: String, value: Value },
    /// Some element of the `container` list has a `subfield` list containing `value`.
    NestedMembership {
        container: String,
        subfield: String,
        value: Value,
    },
}

impl Predicate {
    /// Parse a key using the dotted-path convention. The first `.` splits
    /// container from subfield.
    pub fn parse(key: &str, value: Value) -> Self {
        match key.split_once('.') {
            Some((container, subfield)) => Predicate::NestedMembership {
                container: container.to_string(),
                subfield: subfield.to_string(),
                value,
            },
            None => Predicate::Direct {
                field: key.to_string(),
                value,
            },
        }
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        match self {
            Predicate::Direct { field, value } => record
                .field_value(field)
                .is_some_and(|actual| is_truthy(&actual) && values_equal(&actual, value)),
            Predicate::NestedMembership {
                container,
                subfield,
                value,
            } => match record.field_value(container) {
                Some(Value::Array(items)) => items.iter().any(|item| {
                    matches!(
                        item.get(subfield.as_str()),
                        Some(Value::Array(members)) if members.iter().any(|m| values_equal(m, value))
                    )
                }),
                _ => false,
            },
        }
    }
}

/// A conjunction of predicates. The empty query matches every record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlexibleQuery {
    predicates: Vec<Predicate>,
}

impl FlexibleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate from a key/value pair.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::parse(key, value.into()));
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}

impl<K: AsRef<str>> FromIterator<(K, Value)> for FlexibleQuery {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            predicates: iter
                .into_iter()
                .map(|(k, v)| Predicate::parse(k.as_ref(), v))
                .collect(),
        }
    }
}

/// Build a query from a JSON object, e.g. `{"CURRENCY.CODE": "USD"}`.
/// Anything other than an object yields the empty query.
impl From<Value> for FlexibleQuery {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => FlexibleQuery::default(),
        }
    }
}

/// JavaScript-style truthiness, which the dataset conventions assume.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Structural equality, with numbers compared by value (`65610 == 65610.0`).
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}
