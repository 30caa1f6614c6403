use crate::region::normalize_region;
use crate::sort::compare_names;
use hostdir_types::catalog::{Plan, Provider};
use hostdir_types::index::ProviderIndexItem;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Join plans onto their providers, one index item per provider in input order.
///
/// Plans whose `provider_id` matches no provider are dropped without error.
pub fn build_provider_index(providers: &[Provider], plans: &[Plan]) -> Vec<ProviderIndexItem> {
    let mut plans_by_provider: HashMap<&str, Vec<&Plan>> = HashMap::new();
    for plan in plans {
        plans_by_provider
            .entry(plan.provider_id.as_str())
            .or_default()
            .push(plan);
    }

    let items: Vec<ProviderIndexItem> = providers
        .iter()
        .map(|provider| {
            let provider_plans = plans_by_provider
                .get(provider.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            index_item(provider, provider_plans)
        })
        .collect();

    debug!(
        providers = providers.len(),
        plans = plans.len(),
        "built provider index"
    );
    items
}

fn index_item(provider: &Provider, plans: &[&Plan]) -> ProviderIndexItem {
    let logo = provider.logo.clone().unwrap_or_default();
    let has_logo = !logo.trim().is_empty();

    ProviderIndexItem {
        id: provider.id.clone(),
        name: provider.name.clone(),
        slug: provider.slug.clone(),
        logo,
        region: normalize_region(provider.region.as_deref()),
        short_desc: provider.short_desc.clone().unwrap_or_default(),
        logo_note_de: provider.logo_note_de.clone().unwrap_or_default(),
        logo_note_en: provider.logo_note_en.clone().unwrap_or_default(),
        plan_count: plans.len(),
        min_price_eur: min_price(plans.iter().map(|p| p.price_eur)),
        min_price_usd: min_price(plans.iter().map(|p| p.price_usd)),
        has_ssl: plans.iter().any(|p| p.ssl),
        integration_tags: tag_union(plans),
        has_logo,
    }
}

fn min_price(prices: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    prices
        .flatten()
        .filter(|p| p.is_finite())
        .fold(None, |min: Option<f64>, p| {
            Some(min.map_or(p, |m| m.min(p)))
        })
}

fn tag_union(plans: &[&Plan]) -> Vec<String> {
    let unique: BTreeSet<&str> = plans
        .iter()
        .flat_map(|p| p.integration_tags.iter().map(String::as_str))
        .collect();
    let mut tags: Vec<String> = unique.into_iter().map(str::to_string).collect();
    tags.sort_by(|a, b| compare_names(a, b));
    tags
}
