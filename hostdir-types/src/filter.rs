use serde::{Deserialize, Serialize};

/// Region value meaning "no region constraint".
pub const REGION_ALL: &str = "all";

/// Current filter selections. Read-only input to the filter engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free-text search over name, short description and slug.
    pub q: String,

    /// Normalized region, or [`REGION_ALL`].
    pub region: String,

    pub logo: LogoFilter,

    /// Selected integration tags, sorted and deduplicated. Empty selects everything.
    pub integrations: Vec<String>,

    pub integration_mode: IntegrationMode,

    pub ssl: SslFilter,

    /// Accepted but not applied by the filter engine.
    pub price_min: Option<f64>,

    /// Accepted but not applied by the filter engine.
    pub price_max: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            q: String::new(),
            region: REGION_ALL.to_string(),
            logo: LogoFilter::Any,
            integrations: Vec::new(),
            integration_mode: IntegrationMode::Any,
            ssl: SslFilter::Any,
            price_min: None,
            price_max: None,
        }
    }
}

impl FilterState {
    /// Add a tag to the selection, keeping it sorted and unique.
    pub fn select_integration(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if let Err(pos) = self.integrations.binary_search_by(|t| t.as_str().cmp(tag)) {
            self.integrations.insert(pos, tag.to_string());
        }
    }

    /// Remove a tag from the selection; returns whether it was selected.
    pub fn deselect_integration(&mut self, tag: &str) -> bool {
        let before = self.integrations.len();
        self.integrations.retain(|t| t != tag);
        self.integrations.len() != before
    }

    pub fn has_price_bounds(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoFilter {
    #[default]
    Any,
    With,
    Without,
}

impl LogoFilter {
    pub fn as_param(self) -> &'static str {
        match self {
            LogoFilter::Any => "any",
            LogoFilter::With => "with",
            LogoFilter::Without => "without",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "any" => Some(LogoFilter::Any),
            "with" => Some(LogoFilter::With),
            "without" => Some(LogoFilter::Without),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SslFilter {
    #[default]
    Any,
    Yes,
}

impl SslFilter {
    pub fn as_param(self) -> &'static str {
        match self {
            SslFilter::Any => "any",
            SslFilter::Yes => "yes",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "any" => Some(SslFilter::Any),
            "yes" => Some(SslFilter::Yes),
            _ => None,
        }
    }
}

/// How multiple selected integration tags combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMode {
    /// At least one selected tag.
    #[default]
    Any,
    /// Every selected tag.
    All,
}

impl IntegrationMode {
    pub fn as_param(self) -> &'static str {
        match self {
            IntegrationMode::Any => "any",
            IntegrationMode::All => "all",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "any" => Some(IntegrationMode::Any),
            "all" => Some(IntegrationMode::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Price,
    Name,
    Plans,
}

impl SortKey {
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::Plans => "plans",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortKey::Price),
            "name" => Some(SortKey::Name),
            "plans" => Some(SortKey::Plans),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
}

impl Currency {
    pub fn as_param(self) -> &'static str {
        match self {
            Currency::Eur => "eur",
            Currency::Usd => "usd",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "eur" => Some(Currency::Eur),
            "usd" => Some(Currency::Usd),
            _ => None,
        }
    }
}
