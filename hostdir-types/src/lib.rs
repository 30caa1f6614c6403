//! Shared DTOs for the hostdir workspace.
//!
//! # Design constraints
//! - Catalog records mirror the static JSON files and are read tolerantly.
//! - Derived types (index items, pages, reports) are plain values with no behaviour
//!   beyond small invariant-keeping helpers.

pub mod catalog;
pub mod filter;
pub mod index;
pub mod page;
pub mod report;
pub mod scalar;

mod lenient;

/// File names of the catalog inside a data directory.
pub mod files {
    pub const PROVIDERS_JSON: &str = "providers.json";
    pub const PLANS_JSON: &str = "plans.json";
}
