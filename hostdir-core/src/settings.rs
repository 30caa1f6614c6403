//! Clap-free settings for the validate and listing pipelines.

use hostdir_types::filter::Currency;
use hostdir_validate::Vocabulary;

/// Providers shown per listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Settings for the validate pipeline.
#[derive(Debug, Clone, Default)]
pub struct ValidateSettings {
    pub vocabulary: Vocabulary,
}

/// Settings for the listing pipeline.
#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub page_size: usize,
    pub currency: Currency,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            currency: Currency::default(),
        }
    }
}
