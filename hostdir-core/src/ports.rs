//! Port traits abstracting catalog I/O away from the pipelines.

use hostdir_data::RawCatalog;

/// Source of the raw provider and plan records.
pub trait CatalogSource {
    fn load_raw(&self) -> anyhow::Result<RawCatalog>;
}
