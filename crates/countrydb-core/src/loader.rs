// crates/countrydb-core/src/loader.rs

//! # Data Loader
//!
//! Reads the country dataset (a JSON object keyed by record identifier) into
//! a [`RecordStore`]. Handles the physical layer (files, gzip) and keeps the
//! document order of records.

#![cfg(feature = "json")]

use crate::error::{CountryError, Result};
use crate::model::{CountryRecord, Ordered};
use crate::store::RecordStore;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The sample dataset bundled with the crate.
pub const SAMPLE_DATASET: &str = include_str!("../data/countries.sample.json");

impl RecordStore {
    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Ordered<CountryRecord> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Ordered<CountryRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Load a dataset file. Paths ending in `.gz` are decompressed when the
    /// `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let store = Self::from_reader(reader)?;
        debug!(path = %path.display(), records = store.len(), "loaded country dataset");
        Ok(store)
    }

    /// The bundled sample dataset.
    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_DATASET)
    }

    /// Directory holding the bundled data files.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    fn from_raw(raw: Ordered<CountryRecord>) -> Self {
        Self::from_keyed(raw.0)
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder for `.gz` paths.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        CountryError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if path.extension().is_some_and(|ext| ext == "gz") {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}
