use crate::region::normalize_region;
use hostdir_types::filter::{FilterState, IntegrationMode, LogoFilter, REGION_ALL, SslFilter};
use hostdir_types::index::ProviderIndexItem;
use tracing::debug;

/// Keep the items matching every active predicate of `state`, in input order.
///
/// Price bounds are carried by `FilterState` but are not applied here: an item
/// passes the price predicate whatever `price_min`/`price_max` say.
pub fn filter_providers(index: &[ProviderIndexItem], state: &FilterState) -> Vec<ProviderIndexItem> {
    let search = state.q.trim().to_lowercase();

    if state.has_price_bounds() {
        debug!(
            price_min = ?state.price_min,
            price_max = ?state.price_max,
            "price bounds present; not applied to filtering"
        );
    }

    index
        .iter()
        .filter(|item| {
            matches_search(item, &search)
                && matches_region(item, &state.region)
                && matches_logo(item, state.logo)
                && matches_integrations(item, &state.integrations, state.integration_mode)
                && matches_ssl(item, state.ssl)
        })
        .cloned()
        .collect()
}

fn matches_search(item: &ProviderIndexItem, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let haystack = [
        item.name.as_str(),
        item.short_desc.as_str(),
        item.slug.as_str(),
    ]
    .join(" ")
    .to_lowercase();
    haystack.contains(search)
}

fn matches_region(item: &ProviderIndexItem, region: &str) -> bool {
    region == REGION_ALL || normalize_region(Some(&item.region)) == region
}

fn matches_logo(item: &ProviderIndexItem, logo: LogoFilter) -> bool {
    match logo {
        LogoFilter::Any => true,
        LogoFilter::With => item.has_logo,
        LogoFilter::Without => !item.has_logo,
    }
}

fn matches_integrations(item: &ProviderIndexItem, selected: &[String], mode: IntegrationMode) -> bool {
    if selected.is_empty() {
        return true;
    }
    let carries = |tag: &String| item.integration_tags.contains(tag);
    match mode {
        IntegrationMode::Any => selected.iter().any(carries),
        IntegrationMode::All => selected.iter().all(carries),
    }
}

fn matches_ssl(item: &ProviderIndexItem, ssl: SslFilter) -> bool {
    match ssl {
        SslFilter::Any => true,
        SslFilter::Yes => item.has_ssl,
    }
}
