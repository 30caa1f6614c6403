//! Embeddable core library for hostdir.
//!
//! Provides clap-free entry points suitable for a CLI, a static-site build
//! step or tests.
//!
//! # Port traits
//!
//! Catalog access goes through [`CatalogSource`](ports::CatalogSource); the
//! [`adapters`] module provides filesystem and in-memory implementations.
//!
//! # Entry points
//!
//! - [`run_validate`](pipeline::run_validate) - check the catalog before publishing
//! - [`run_listing`](pipeline::run_listing) - index, filter, sort and page the catalog

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use hostdir_data::{CatalogPaths, DEFAULT_DATA_DIR, DataLoadError, RawCatalog};
