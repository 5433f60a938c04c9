//! countrydb prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::db::CountryDb;
pub use crate::error::{CountryError, Result};
pub use crate::model::{Currency, CountryRecord, NameTable, PhoneCodes, DEFAULT_LANGUAGE};
pub use crate::options::MatchOptions;
pub use crate::query::{FlexibleQuery, Predicate};
pub use crate::search::{CountrySearch, LanguageNames};
pub use crate::store::RecordStore;
pub use crate::text::{flag_emoji, normalize};
pub use crate::traits::NameMatch;
