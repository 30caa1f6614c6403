use serde::{Deserialize, Serialize};

/// One page of a sequence.
///
/// `page` is the clamped page actually returned, which may differ from the
/// one requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}
