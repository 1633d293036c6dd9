//! Loads the reference collections from a data directory.
//!
//! Each collection lives in its own JSON file with a top-level key wrapping the
//! records. Missing files and documents without records load as empty
//! collections; anything that does not parse is a `DataError`.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DataError;
use crate::model::{
    BlacklistCategory, BlacklistInfo, Catalog, CollectionKind, Industry, Record, Structure,
    Style, Tone,
};

#[derive(Debug, Clone)]
pub struct DataSource {
    dir: PathBuf,
}

impl DataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: CollectionKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    pub fn load_styles(&self) -> Result<Vec<Record<Style>>, DataError> {
        self.load_list(CollectionKind::Style)
    }

    pub fn load_tones(&self) -> Result<Vec<Record<Tone>>, DataError> {
        self.load_list(CollectionKind::Tone)
    }

    pub fn load_structures(&self) -> Result<Vec<Record<Structure>>, DataError> {
        self.load_list(CollectionKind::Structure)
    }

    pub fn load_industries(&self) -> Result<Vec<Record<Industry>>, DataError> {
        self.load_list(CollectionKind::Industry)
    }

    /// Categories come back in the key order of the source file.
    pub fn load_blacklist(&self) -> Result<Vec<BlacklistCategory>, DataError> {
        let kind = CollectionKind::Blacklist;
        let Some(section) = self.load_section(kind)? else {
            return Ok(Vec::new());
        };

        let path = self.path_for(kind);
        let categories: Map<String, Value> =
            serde_json::from_value(section).map_err(|source| DataError::Malformed {
                path: path.clone(),
                source,
            })?;

        let mut result = Vec::with_capacity(categories.len());
        for (key, info) in categories {
            let info: Record<BlacklistInfo> =
                serde_json::from_value(info).map_err(|source| DataError::Malformed {
                    path: path.clone(),
                    source,
                })?;
            result.push(BlacklistCategory { key, info });
        }

        debug!(kind = %kind, count = result.len(), "collection loaded");
        Ok(result)
    }

    /// Load the requested collections. The rest of the catalog stays empty.
    ///
    /// Stops at the first malformed file: no partial catalog is returned.
    pub fn load_catalog(&self, kinds: &[CollectionKind]) -> Result<Catalog, DataError> {
        let mut catalog = Catalog::default();
        for kind in kinds {
            match kind {
                CollectionKind::Style => catalog.styles = self.load_styles()?,
                CollectionKind::Tone => catalog.tones = self.load_tones()?,
                CollectionKind::Structure => catalog.structures = self.load_structures()?,
                CollectionKind::Industry => catalog.industries = self.load_industries()?,
                CollectionKind::Blacklist => catalog.blacklist = self.load_blacklist()?,
            }
        }
        Ok(catalog)
    }

    fn load_list<T: DeserializeOwned>(&self, kind: CollectionKind) -> Result<Vec<T>, DataError> {
        let Some(section) = self.load_section(kind)? else {
            return Ok(Vec::new());
        };

        let records: Vec<T> =
            serde_json::from_value(section).map_err(|source| DataError::Malformed {
                path: self.path_for(kind),
                source,
            })?;

        debug!(kind = %kind, count = records.len(), "collection loaded");
        Ok(records)
    }

    /// Returns the value under the collection's top-level key, or `None` when
    /// the file is missing or holds no records.
    fn load_section(&self, kind: CollectionKind) -> Result<Option<Value>, DataError> {
        let path = self.path_for(kind);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "data file not found, collection is empty");
                return Ok(None);
            }
            Err(source) => return Err(DataError::Io { path, source }),
        };

        let document: Value = serde_json::from_str(&content).map_err(|source| {
            DataError::Malformed {
                path: path.clone(),
                source,
            }
        })?;

        match document {
            Value::Null => return Ok(None),
            Value::Array(ref items) if items.is_empty() => return Ok(None),
            _ => {}
        }

        let mut root: Map<String, Value> = serde_json::from_value(document)
            .map_err(|source| DataError::Malformed { path, source })?;

        Ok(root.remove(kind.data_key()).filter(|section| !section.is_null()))
    }
}
