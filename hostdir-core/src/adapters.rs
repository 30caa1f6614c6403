//! Default port implementations.

use crate::ports::CatalogSource;
use anyhow::Context;
use camino::Utf8Path;
use hostdir_data::{CatalogPaths, RawCatalog};
use serde_json::Value;
use tracing::debug;

/// Reads `providers.json` and `plans.json` from disk.
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    pub paths: CatalogPaths,
}

impl FsCatalogSource {
    pub fn new(paths: CatalogPaths) -> Self {
        Self { paths }
    }

    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self::new(CatalogPaths::in_dir(dir))
    }
}

impl CatalogSource for FsCatalogSource {
    fn load_raw(&self) -> anyhow::Result<RawCatalog> {
        debug!(
            providers = %self.paths.providers,
            plans = %self.paths.plans,
            "loading catalog"
        );
        hostdir_data::load_raw(&self.paths).context("load catalog")
    }
}

/// Pre-loaded records for embedding and testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    raw: RawCatalog,
}

impl InMemoryCatalogSource {
    pub fn new(providers: Vec<Value>, plans: Vec<Value>) -> Self {
        Self {
            raw: RawCatalog { providers, plans },
        }
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn load_raw(&self) -> anyhow::Result<RawCatalog> {
        Ok(self.raw.clone())
    }
}
