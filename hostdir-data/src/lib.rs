//! Catalog ingestion.
//!
//! The catalog is two JSON arrays in one data directory. The validator needs
//! the records exactly as written ([`RawCatalog`]); the listing pipeline reads
//! them tolerantly into typed records ([`Catalog`](hostdir_types::catalog::Catalog)).

mod load;

pub use load::{CatalogPaths, DEFAULT_DATA_DIR, DataLoadError, RawCatalog, load_catalog, load_raw};
