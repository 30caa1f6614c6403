use crate::lenient;
use serde::{Deserialize, Serialize};

/// A hosting/infrastructure company listed in the directory.
///
/// Unknown fields are ignored and malformed optional fields read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub id: String,

    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub slug: String,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub short_desc: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_note_de: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_note_en: Option<String>,
}

/// One priced offering belonging to a [`Provider`] via `provider_id`.
///
/// The foreign key is not checked here; the validator owns that rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(
        default,
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub provider_id: String,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::finite_number")]
    pub price_eur: Option<f64>,

    #[serde(default, deserialize_with = "lenient::finite_number")]
    pub price_usd: Option<f64>,

    #[serde(default, deserialize_with = "lenient::strict_true")]
    pub ssl: bool,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub integration_tags: Vec<String>,

    #[serde(default, deserialize_with = "lenient::finite_number")]
    pub storage_gb: Option<f64>,

    #[serde(default, deserialize_with = "lenient::finite_number")]
    pub traffic_gb: Option<f64>,

    #[serde(default, deserialize_with = "lenient::finite_number")]
    pub domains: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_verified_at: Option<String>,
}

/// Providers and plans as loaded from one data directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub providers: Vec<Provider>,
    pub plans: Vec<Plan>,
}
