use serde::{Deserialize, Serialize};

/// Per-provider aggregate used for display, filtering and sorting.
///
/// `plan_count == 0` is legal; both minimum prices are then `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderIndexItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo: String,
    pub region: String,
    pub short_desc: String,
    pub logo_note_de: String,
    pub logo_note_en: String,
    pub plan_count: usize,
    pub min_price_eur: Option<f64>,
    pub min_price_usd: Option<f64>,
    pub has_ssl: bool,
    /// Sorted, deduplicated union of the provider's plan tags.
    pub integration_tags: Vec<String>,
    pub has_logo: bool,
}

impl ProviderIndexItem {
    pub fn min_price(&self, currency: crate::filter::Currency) -> Option<f64> {
        match currency {
            crate::filter::Currency::Eur => self.min_price_eur,
            crate::filter::Currency::Usd => self.min_price_usd,
        }
    }
}
