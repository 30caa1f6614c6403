use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use hostdir_types::catalog::{Catalog, Plan, Provider};
use hostdir_types::files::{PLANS_JSON, PROVIDERS_JSON};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "src/data";

/// Locations of the two catalog files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub providers: Utf8PathBuf,
    pub plans: Utf8PathBuf,
}

impl CatalogPaths {
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            providers: dir.join(PROVIDERS_JSON),
            plans: dir.join(PLANS_JSON),
        }
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self::in_dir(Utf8Path::new(DEFAULT_DATA_DIR))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataLoadError {
    #[error("io error reading {path}: {message}")]
    Io { path: Utf8PathBuf, message: String },

    #[error("json parse error in {path}: {message}")]
    Json { path: Utf8PathBuf, message: String },

    #[error("{path} must contain a JSON array")]
    NotAnArray { path: Utf8PathBuf },
}

/// Catalog records exactly as written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCatalog {
    pub providers: Vec<Value>,
    pub plans: Vec<Value>,
}

impl RawCatalog {
    /// Read the raw records into typed ones. Malformed fields degrade to
    /// defaults; a record that is not an object is skipped.
    pub fn to_catalog(&self) -> Catalog {
        Catalog {
            providers: typed_records::<Provider>(&self.providers),
            plans: typed_records::<Plan>(&self.plans),
        }
    }
}

/// Read both files. Exactly two reads; nothing else touches the disk.
pub fn load_raw(paths: &CatalogPaths) -> Result<RawCatalog, DataLoadError> {
    let providers = read_array(&paths.providers)?;
    let plans = read_array(&paths.plans)?;
    debug!(
        providers = providers.len(),
        plans = plans.len(),
        "loaded raw catalog"
    );
    Ok(RawCatalog { providers, plans })
}

/// Read both files into typed, tolerant records.
pub fn load_catalog(paths: &CatalogPaths) -> Result<Catalog, DataLoadError> {
    Ok(load_raw(paths)?.to_catalog())
}

fn read_array(path: &Utf8Path) -> Result<Vec<Value>, DataLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(&contents).map_err(|e| DataLoadError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(DataLoadError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

fn typed_records<T: DeserializeOwned>(raw: &[Value]) -> Vec<T> {
    raw.iter()
        .filter_map(|v| match serde_json::from_value::<T>(v.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "skipping unreadable record");
                None
            }
        })
        .collect()
}
