//! Domain logic: turn providers + plans into a filtered, ordered, paged listing.
//!
//! Every function here is pure. Inputs are borrowed, outputs are freshly
//! allocated, and nothing is cached between calls.

mod filter;
mod index;
mod paginate;
mod region;
mod sort;

pub use filter::filter_providers;
pub use index::build_provider_index;
pub use paginate::paginate;
pub use region::{DEFAULT_REGION, normalize_region};
pub use sort::{compare_names, sort_providers};
