use hostdir_domain::normalize_region;
use hostdir_types::filter::{
    FilterState, IntegrationMode, LogoFilter, REGION_ALL, SortKey, SslFilter,
};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query parameter names, in serialization order.
pub mod params {
    pub const Q: &str = "q";
    pub const REGION: &str = "region";
    pub const LOGO: &str = "logo";
    pub const INTEGRATION: &str = "integration";
    pub const INTEGRATION_MODE: &str = "integrationMode";
    pub const SSL: &str = "ssl";
    pub const PRICE_MIN: &str = "priceMin";
    pub const PRICE_MAX: &str = "priceMax";
    pub const SORT: &str = "sort";
    pub const PAGE: &str = "page";
}

/// Legacy single-select value meaning "no integration constraint".
const INTEGRATION_ALL: &str = "all";

/// Everything a listing page reads from its URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub filter: FilterState,
    pub sort: SortKey,
    /// Requested page, 1-based. May be out of range; the paginator clamps it.
    pub page: i64,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Reset every filter, the sort and the page.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_default(&self) -> bool {
        to_query_string(self).is_empty()
    }
}

/// Parse a URL query string, with or without the leading `?`.
///
/// Never fails: unknown keys are ignored and unparsable values keep their
/// defaults. Repeated `integration` keys accumulate.
pub fn parse_query(query: &str) -> ListingQuery {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut out = ListingQuery::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let value = value.as_ref();
        match key.as_ref() {
            params::Q => out.filter.q = value.to_string(),
            params::REGION => out.filter.region = parse_region(value),
            params::LOGO => {
                out.filter.logo = LogoFilter::from_param(value).unwrap_or_default();
            }
            params::INTEGRATION => {
                for tag in value.split(',').map(str::trim) {
                    if tag != INTEGRATION_ALL {
                        out.filter.select_integration(tag);
                    }
                }
            }
            params::INTEGRATION_MODE => {
                out.filter.integration_mode = IntegrationMode::from_param(value).unwrap_or_default();
            }
            params::SSL => out.filter.ssl = SslFilter::from_param(value).unwrap_or_default(),
            params::PRICE_MIN => out.filter.price_min = parse_price(value),
            params::PRICE_MAX => out.filter.price_max = parse_price(value),
            params::SORT => out.sort = SortKey::from_param(value).unwrap_or_default(),
            params::PAGE => out.page = value.trim().parse().unwrap_or(1),
            _ => {}
        }
    }

    out
}

/// Serialize to a query string without the leading `?`.
///
/// Keys follow the fixed order of [`params`], defaults are omitted and
/// integration tags are joined in sorted order. The default query serializes
/// to an empty string.
pub fn to_query_string(query: &ListingQuery) -> String {
    let filter = &query.filter;
    let mut ser = form_urlencoded::Serializer::new(String::new());

    let q = filter.q.trim();
    if !q.is_empty() {
        ser.append_pair(params::Q, q);
    }
    if filter.region != REGION_ALL {
        ser.append_pair(params::REGION, &filter.region);
    }
    if filter.logo != LogoFilter::Any {
        ser.append_pair(params::LOGO, filter.logo.as_param());
    }
    if !filter.integrations.is_empty() {
        let mut tags = filter.integrations.clone();
        tags.sort();
        tags.dedup();
        ser.append_pair(params::INTEGRATION, &tags.join(","));
        if filter.integration_mode != IntegrationMode::Any {
            ser.append_pair(params::INTEGRATION_MODE, filter.integration_mode.as_param());
        }
    }
    if filter.ssl != SslFilter::Any {
        ser.append_pair(params::SSL, filter.ssl.as_param());
    }
    if let Some(min) = filter.price_min {
        ser.append_pair(params::PRICE_MIN, &min.to_string());
    }
    if let Some(max) = filter.price_max {
        ser.append_pair(params::PRICE_MAX, &max.to_string());
    }
    if query.sort != SortKey::default() {
        ser.append_pair(params::SORT, query.sort.as_param());
    }
    if query.page > 1 {
        ser.append_pair(params::PAGE, &query.page.to_string());
    }

    ser.finish()
}

fn parse_region(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(REGION_ALL) {
        REGION_ALL.to_string()
    } else {
        normalize_region(Some(trimmed))
    }
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_query_is_default() {
        assert_eq!(parse_query(""), ListingQuery::default());
        assert_eq!(parse_query("?"), ListingQuery::default());
        assert_eq!(to_query_string(&ListingQuery::default()), "");
    }

    #[test]
    fn parses_every_key() {
        let q = parse_query(
            "?q=aws&region=EU&logo=with&integration=edge,ci%2Fcd&integrationMode=all\
             &ssl=yes&priceMin=14&priceMax=24.5&sort=name&page=3",
        );

        assert_eq!(q.filter.q, "aws");
        assert_eq!(q.filter.region, "eu");
        assert_eq!(q.filter.logo, LogoFilter::With);
        assert_eq!(q.filter.integrations, vec!["ci/cd", "edge"]);
        assert_eq!(q.filter.integration_mode, IntegrationMode::All);
        assert_eq!(q.filter.ssl, SslFilter::Yes);
        assert_eq!(q.filter.price_min, Some(14.0));
        assert_eq!(q.filter.price_max, Some(24.5));
        assert_eq!(q.sort, SortKey::Name);
        assert_eq!(q.page, 3);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let q = parse_query("logo=maybe&ssl=no&sort=rating&page=two&priceMin=cheap&region=%20&x=1");
        assert_eq!(q, ListingQuery::default());
    }

    #[test]
    fn integration_all_sentinel_and_blanks_are_dropped() {
        let q = parse_query("integration=all,,ssl");
        assert_eq!(q.filter.integrations, vec!["ssl"]);
    }

    #[test]
    fn repeated_integration_keys_accumulate() {
        let q = parse_query("integration=ssl&integration=edge");
        assert_eq!(q.filter.integrations, vec!["edge", "ssl"]);
    }

    #[test]
    fn integrations_serialize_in_stable_order() {
        let mut q = ListingQuery::default();
        q.filter.select_integration("ssl");
        q.filter.select_integration("edge");
        q.filter.select_integration("ci/cd");

        assert_eq!(to_query_string(&q), "integration=ci%2Fcd%2Cedge%2Cssl");
    }

    #[test]
    fn mode_is_omitted_without_integrations() {
        let mut q = ListingQuery::default();
        q.filter.integration_mode = IntegrationMode::All;
        assert_eq!(to_query_string(&q), "");
    }

    #[test]
    fn serializes_in_fixed_key_order() {
        let q = parse_query("page=2&sort=plans&q=fly%20io&ssl=yes&priceMax=10");
        assert_eq!(to_query_string(&q), "q=fly+io&ssl=yes&priceMax=10&sort=plans&page=2");
    }

    #[test]
    fn cleared_query_serializes_empty() {
        let q = parse_query("q=aws&integration=edge&integrationMode=all&priceMin=14&priceMax=24&sort=name");
        assert!(!q.is_default());
        assert!(ListingQuery::cleared().is_default());
    }
}
