//! Integrity rules run over the raw catalog before it is published.
//!
//! The validator reads records as plain JSON values so it can report data that
//! a typed reader would silently coerce (a string price, a missing array).
//! Every rule violation is collected; nothing stops the run early.

mod rules;
mod value;
mod violation;
mod vocabulary;

pub use rules::validate;
pub use violation::Violation;
pub use vocabulary::{
    DEFAULT_ALLOWED_TAGS, DEFAULT_PLACEHOLDER_MARKER, DEFAULT_TOP_PROVIDERS, Vocabulary,
};
