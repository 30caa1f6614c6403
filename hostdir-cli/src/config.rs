//! Configuration file loading for hostdir.
//!
//! Discovers and loads `hostdir.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use hostdir_core::settings::{DEFAULT_PAGE_SIZE, ListingSettings, ValidateSettings};
use hostdir_types::filter::Currency;
use hostdir_validate::{
    DEFAULT_ALLOWED_TAGS, DEFAULT_PLACEHOLDER_MARKER, DEFAULT_TOP_PROVIDERS, Vocabulary,
};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "hostdir.toml";

/// Top-level configuration from hostdir.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostdirConfig {
    pub data: DataConfig,
    pub validate: ValidateConfig,
    pub listing: ListingConfig,
}

/// Where the catalog files live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding providers.json and plans.json, relative to the
    /// working directory.
    pub dir: Utf8PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: Utf8PathBuf::from(hostdir_core::DEFAULT_DATA_DIR),
        }
    }
}

/// Vocabularies for the validator. Unset fields keep the built-in lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    pub allowed_tags: Option<Vec<String>>,
    pub top_providers: Option<Vec<String>>,
    pub placeholder_marker: Option<String>,
}

/// Listing defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: Option<usize>,
    pub currency: Option<Currency>,
}

/// Discover the hostdir.toml config file.
///
/// Returns `None` if no config file is found.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a hostdir.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<HostdirConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<HostdirConfig> {
    let config: HostdirConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `root`, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<HostdirConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(HostdirConfig::default()),
    }
}

/// Config file and CLI arguments, resolved into pipeline settings.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub data_dir: Utf8PathBuf,
    pub validate: ValidateSettings,
    pub listing: ListingSettings,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: HostdirConfig,
}

impl ConfigMerger {
    pub fn new(config: HostdirConfig) -> Self {
        Self { config }
    }

    /// `validate` takes no arguments; everything comes from the file.
    pub fn merge_validate_args(self) -> MergedConfig {
        self.merge_list_args(None, None)
    }

    /// CLI `page_size` and `currency` override the `[listing]` section.
    pub fn merge_list_args(
        self,
        cli_page_size: Option<usize>,
        cli_currency: Option<Currency>,
    ) -> MergedConfig {
        let validate = self.config.validate;
        let vocabulary = Vocabulary::new(
            validate.allowed_tags.unwrap_or_else(|| {
                DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect()
            }),
            validate.top_providers.unwrap_or_else(|| {
                DEFAULT_TOP_PROVIDERS.iter().map(|p| p.to_string()).collect()
            }),
            validate
                .placeholder_marker
                .as_deref()
                .unwrap_or(DEFAULT_PLACEHOLDER_MARKER),
        );

        let listing = ListingSettings {
            page_size: cli_page_size
                .or(self.config.listing.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            currency: cli_currency
                .or(self.config.listing.currency)
                .unwrap_or_default(),
        };

        MergedConfig {
            data_dir: self.config.data.dir,
            validate: ValidateSettings { vocabulary },
            listing,
        }
    }
}
