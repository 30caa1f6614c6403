//! Validate and listing pipelines, extracted from the CLI.
//!
//! Catalog access goes through [`CatalogSource`]; everything after loading is
//! pure.

use crate::ports::CatalogSource;
use crate::settings::{ListingSettings, ValidateSettings};
use hostdir_domain::{build_provider_index, filter_providers, paginate, sort_providers};
use hostdir_query::{Chip, ListingQuery, active_chips, to_query_string};
use hostdir_types::filter::Currency;
use hostdir_types::index::ProviderIndexItem;
use hostdir_types::page::Page;
use hostdir_types::report::ValidationReport;
use serde::Serialize;
use tracing::debug;

/// Error type for pipeline results. Every variant maps to exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("catalog failed validation with {count} violation(s)")]
    ValidationFailed { count: usize },
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Outcome of `run_validate`.
#[derive(Debug, Clone)]
pub struct ValidateOutcome {
    pub report: ValidationReport,
}

impl ValidateOutcome {
    /// `Some(ValidationFailed)` when any rule was broken.
    pub fn failure(&self) -> Option<ToolError> {
        (!self.report.passed()).then(|| ToolError::ValidationFailed {
            count: self.report.violations.len(),
        })
    }
}

/// Run every validation rule over the catalog.
///
/// Rule violations are part of the outcome, not an error; only failing to load
/// the catalog returns `Err`.
pub fn run_validate(
    settings: &ValidateSettings,
    source: &dyn CatalogSource,
) -> Result<ValidateOutcome, ToolError> {
    let raw = source.load_raw()?;

    let violations: Vec<String> =
        hostdir_validate::validate(&raw.providers, &raw.plans, &settings.vocabulary)
            .iter()
            .map(ToString::to_string)
            .collect();

    let report = ValidationReport::new(raw.plans.len() as u64, violations);
    debug!(
        status = ?report.status,
        plans_checked = report.plans_checked,
        violations = report.violations.len(),
        "validation finished"
    );
    Ok(ValidateOutcome { report })
}

/// Outcome of `run_listing`.
#[derive(Debug, Clone, Serialize)]
pub struct ListingOutcome {
    /// Canonical query string for the request, without the leading `?`.
    pub query: String,
    pub currency: Currency,
    /// Providers in the directory before filtering.
    pub total: usize,
    /// Providers left after filtering.
    pub filtered: usize,
    pub chips: Vec<Chip>,
    pub page: Page<ProviderIndexItem>,
}

/// Index, filter, sort and page the catalog for one listing request.
pub fn run_listing(
    settings: &ListingSettings,
    source: &dyn CatalogSource,
    query: &ListingQuery,
) -> Result<ListingOutcome, ToolError> {
    let catalog = source.load_raw()?.to_catalog();

    let index = build_provider_index(&catalog.providers, &catalog.plans);
    let filtered = filter_providers(&index, &query.filter);
    let sorted = sort_providers(&filtered, query.sort, settings.currency);
    let page = paginate(&sorted, query.page, settings.page_size);

    debug!(
        total = index.len(),
        filtered = filtered.len(),
        page = page.page,
        page_count = page.page_count,
        "listing built"
    );

    let mut canonical = query.clone();
    canonical.page = page.page as i64;

    Ok(ListingOutcome {
        query: to_query_string(&canonical),
        currency: settings.currency,
        total: index.len(),
        filtered: filtered.len(),
        chips: active_chips(query),
        page,
    })
}
