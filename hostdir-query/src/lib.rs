//! Listing state carried in the page URL.
//!
//! Parsing is forgiving (unknown keys and bad values fall back to defaults) and
//! serialization is deterministic so the same selection always yields the same
//! URL.

mod chips;
mod listing;

pub use chips::{Chip, ChipKind, active_chips};
pub use listing::{ListingQuery, params, parse_query, to_query_string};
