use camino::Utf8PathBuf;
use hostdir_core::adapters::FsCatalogSource;
use hostdir_core::pipeline::{ToolError, run_listing, run_validate};
use hostdir_core::settings::{ListingSettings, ValidateSettings};
use hostdir_query::{ChipKind, parse_query};
use hostdir_types::filter::Currency;
use hostdir_validate::Vocabulary;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const PROVIDERS: &str = r#"[
  {"id": "netcup", "name": "netcup", "slug": "netcup", "region": " DE "},
  {"id": "Akamai", "name": "Akamai", "slug": "akamai", "logo": "/logos/akamai.svg"},
  {"id": "fly", "name": "Fly.io", "slug": "fly", "region": "Global"}
]"#;

const PLANS: &str = r#"[
  {"id": "nc-1", "provider_id": "netcup", "name": "Web 1000", "price_eur": 2.17, "price_usd": 2.4,
   "storage_gb": 75, "traffic_gb": null, "domains": 1, "ssl": true,
   "integration_tags": ["ssl", "backup"], "last_verified_at": "2026-09-30"},
  {"id": "ak-1", "provider_id": "Akamai", "name": "Nanode", "price_eur": 5, "price_usd": 5,
   "storage_gb": 25, "traffic_gb": 1000, "domains": null,
   "integration_tags": ["api", "docker"], "last_verified_at": "2026-09-30"},
  {"id": "fly-1", "provider_id": "fly", "name": "Hobby", "price_eur": 0, "price_usd": 0,
   "storage_gb": 3, "traffic_gb": 160, "domains": null, "ssl": true,
   "integration_tags": ["edge", "docker"], "last_verified_at": "2026-09-30"}
]"#;

fn data_dir(providers: &str, plans: &str) -> (TempDir, FsCatalogSource) {
    let temp = TempDir::new().unwrap();
    let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    std::fs::write(dir.join("providers.json"), providers).unwrap();
    std::fs::write(dir.join("plans.json"), plans).unwrap();
    (temp, FsCatalogSource::in_dir(&dir))
}

fn no_top_providers() -> ValidateSettings {
    ValidateSettings {
        vocabulary: Vocabulary::new(
            hostdir_validate::DEFAULT_ALLOWED_TAGS.iter().copied(),
            Vec::<String>::new(),
            hostdir_validate::DEFAULT_PLACEHOLDER_MARKER,
        ),
    }
}

#[test]
fn validate_passes_on_clean_catalog() {
    let (_temp, source) = data_dir(PROVIDERS, PLANS);

    let outcome = run_validate(&no_top_providers(), &source).unwrap();

    assert!(outcome.report.passed());
    assert_eq!(outcome.report.plans_checked, 3);
    assert!(outcome.report.violations.is_empty());
    assert!(outcome.failure().is_none());
}

#[test]
fn validate_default_vocabulary_requires_top_providers() {
    let (_temp, source) = data_dir(PROVIDERS, PLANS);

    let outcome = run_validate(&ValidateSettings::default(), &source).unwrap();

    assert!(!outcome.report.passed());
    assert!(
        outcome
            .report
            .violations
            .iter()
            .all(|v| v.starts_with("Top-10 provider has no plans: "))
    );
    assert_eq!(
        outcome.report.violations.len(),
        hostdir_validate::DEFAULT_TOP_PROVIDERS.len()
    );
}

#[test]
fn validate_missing_file_is_internal_error() {
    let temp = TempDir::new().unwrap();
    let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
    let source = FsCatalogSource::in_dir(&dir);

    let err = run_validate(&ValidateSettings::default(), &source).unwrap_err();

    assert!(matches!(err, ToolError::Internal(_)));
    assert_eq!(err.exit_code(), 1);
    let msg = err.to_string();
    assert!(msg.starts_with("load catalog: io error reading"), "{msg}");
    assert!(msg.contains("providers.json"), "{msg}");
}

#[test]
fn validate_rejects_non_array_file() {
    let (_temp, source) = data_dir(PROVIDERS, r#"{"plans": []}"#);

    let err = run_validate(&no_top_providers(), &source).unwrap_err();

    assert!(err.to_string().contains("must contain a JSON array"));
}

#[test]
fn listing_normalizes_regions_and_filters() {
    let (_temp, source) = data_dir(PROVIDERS, PLANS);

    let out = run_listing(
        &ListingSettings::default(),
        &source,
        &parse_query("region=de"),
    )
    .unwrap();

    assert_eq!(out.total, 3);
    assert_eq!(out.filtered, 1);
    assert_eq!(out.page.items[0].id, "netcup");
    assert_eq!(out.page.items[0].region, "de");
    assert_eq!(out.chips.len(), 1);
    assert_eq!(out.chips[0].kind, ChipKind::Region);
}

#[test]
fn listing_sorts_by_name_ignoring_case() {
    let (_temp, source) = data_dir(PROVIDERS, PLANS);

    let out = run_listing(
        &ListingSettings::default(),
        &source,
        &parse_query("sort=name"),
    )
    .unwrap();

    let names: Vec<&str> = out.page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Akamai", "Fly.io", "netcup"]);
}

#[test]
fn listing_usd_currency_orders_by_usd_price() {
    let (_temp, source) = data_dir(PROVIDERS, PLANS);
    let settings = ListingSettings {
        currency: Currency::Usd,
        ..Default::default()
    };

    let out = run_listing(&settings, &source, &parse_query("integration=docker")).unwrap();

    let ids: Vec<&str> = out.page.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["fly", "Akamai"]);
    assert_eq!(out.query, "integration=docker");
}

#[test]
fn listing_outcome_serializes_to_json() {
    let (_temp, source) = data_dir(PROVIDERS, PLANS);

    let out = run_listing(
        &ListingSettings::default(),
        &source,
        &parse_query("logo=with"),
    )
    .unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["total"], 3);
    assert_eq!(json["filtered"], 1);
    assert_eq!(json["currency"], "eur");
    assert_eq!(json["page"]["items"][0]["slug"], "akamai");
    assert_eq!(json["chips"][0]["kind"], "logo");
}
