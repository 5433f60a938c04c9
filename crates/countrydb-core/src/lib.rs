// crates/countrydb-core/src/lib.rs

//! Country reference data with exact, fuzzy and flexible lookups.
//!
//! A [`RecordStore`] holds the immutable collection of [`CountryRecord`]s.
//! [`CountryDb`] wraps it with the lazily-built name index used by fuzzy
//! search and autocomplete. Exact lookups live on the [`CountrySearch`]
//! trait, which both types implement.
//!
#![cfg_attr(feature = "json", doc = "```rust")]
#![cfg_attr(not(feature = "json"), doc = "```ignore")]
//! use countrydb_core::prelude::*;
//!
//! let db = CountryDb::sample()?;
//! assert_eq!(db.find_by_code("lk").map(|c| c.name()), Some("Sri Lanka"));
//! assert_eq!(db.find_iso3(" SRI "), Some("LKA"));
//! # Ok::<(), countrydb_core::CountryError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod db;
pub mod error;
pub mod fuzzy;
pub mod loader; // JSON dataset entry points ('json' feature)
pub mod model;
pub mod name_index;
pub mod options;
pub mod prelude;
pub mod query;
pub mod search; // The exact/code matcher
pub mod store;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::db::CountryDb;
pub use crate::error::{CountryError, Result};
pub use crate::model::{Currency, CountryRecord, NameTable, PhoneCodes, DEFAULT_LANGUAGE};
pub use crate::name_index::{NameIndex, NameIndexEntry};
pub use crate::options::MatchOptions;
pub use crate::query::{FlexibleQuery, Predicate};
pub use crate::search::{CountrySearch, LanguageNames};
pub use crate::store::RecordStore;
pub use crate::text::{flag_emoji, normalize};
