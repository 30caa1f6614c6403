use hostdir_types::filter::{Currency, SortKey};
use hostdir_types::index::ProviderIndexItem;
use std::cmp::Ordering;

/// Order names the way a reader expects: case-insensitively first, then
/// lowercase before uppercase so the order stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        // Uppercase letters sit below their lowercase forms in code point order.
        .then_with(|| b.cmp(a))
}

/// Return a newly ordered copy of `items`; the input is not touched.
///
/// - `Name`: ascending name.
/// - `Plans`: descending plan count, then ascending name.
/// - `Price`: ascending minimum price in `currency`, providers without a price
///   last, then ascending name.
pub fn sort_providers(
    items: &[ProviderIndexItem],
    sort_key: SortKey,
    currency: Currency,
) -> Vec<ProviderIndexItem> {
    let mut sorted = items.to_vec();
    match sort_key {
        SortKey::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Plans => sorted.sort_by(|a, b| {
            b.plan_count
                .cmp(&a.plan_count)
                .then_with(|| compare_names(&a.name, &b.name))
        }),
        SortKey::Price => sorted.sort_by(|a, b| {
            compare_prices(a.min_price(currency), b.min_price(currency))
                .then_with(|| compare_names(&a.name, &b.name))
        }),
    }
    sorted
}

fn compare_prices(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.total_cmp(&b),
    }
}
