use crate::listing::ListingQuery;
use hostdir_types::filter::{LogoFilter, REGION_ALL, SslFilter};
use serde::{Deserialize, Serialize};

/// Which filter a chip removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipKind {
    Q,
    Region,
    Logo,
    Integration,
    Ssl,
    PriceMin,
    PriceMax,
}

/// One removable active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub kind: ChipKind,
    pub value: String,
}

impl Chip {
    fn new(kind: ChipKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Active filters as chips, one per selected integration tag.
pub fn active_chips(query: &ListingQuery) -> Vec<Chip> {
    let filter = &query.filter;
    let mut chips = Vec::new();

    let q = filter.q.trim();
    if !q.is_empty() {
        chips.push(Chip::new(ChipKind::Q, q));
    }
    if filter.region != REGION_ALL {
        chips.push(Chip::new(ChipKind::Region, filter.region.as_str()));
    }
    if filter.logo != LogoFilter::Any {
        chips.push(Chip::new(ChipKind::Logo, filter.logo.as_param()));
    }
    for tag in &filter.integrations {
        chips.push(Chip::new(ChipKind::Integration, tag.as_str()));
    }
    if filter.ssl != SslFilter::Any {
        chips.push(Chip::new(ChipKind::Ssl, filter.ssl.as_param()));
    }
    if let Some(min) = filter.price_min {
        chips.push(Chip::new(ChipKind::PriceMin, min.to_string()));
    }
    if let Some(max) = filter.price_max {
        chips.push(Chip::new(ChipKind::PriceMax, max.to_string()));
    }

    chips
}

impl ListingQuery {
    /// Drop the filter behind `chip` and go back to the first page.
    pub fn without_chip(&self, chip: &Chip) -> ListingQuery {
        let mut next = self.clone();
        let filter = &mut next.filter;
        match chip.kind {
            ChipKind::Q => filter.q.clear(),
            ChipKind::Region => filter.region = REGION_ALL.to_string(),
            ChipKind::Logo => filter.logo = LogoFilter::Any,
            ChipKind::Integration => {
                filter.deselect_integration(&chip.value);
            }
            ChipKind::Ssl => filter.ssl = SslFilter::Any,
            ChipKind::PriceMin => filter.price_min = None,
            ChipKind::PriceMax => filter.price_max = None,
        }
        next.page = 1;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{parse_query, to_query_string};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_query_has_no_chips() {
        assert!(active_chips(&ListingQuery::default()).is_empty());
    }

    #[test]
    fn one_chip_per_integration_tag() {
        let q = parse_query("integration=edge,ssl&integrationMode=all&ssl=yes");
        let chips = active_chips(&q);

        assert_eq!(
            chips,
            vec![
                Chip::new(ChipKind::Integration, "edge"),
                Chip::new(ChipKind::Integration, "ssl"),
                Chip::new(ChipKind::Ssl, "yes"),
            ]
        );
    }

    #[test]
    fn removing_integration_chip_keeps_other_tags() {
        let q = parse_query("integration=edge,ssl&integrationMode=all&page=4");
        let next = q.without_chip(&Chip::new(ChipKind::Integration, "edge"));

        assert_eq!(next.filter.integrations, vec!["ssl"]);
        assert_eq!(next.page, 1);
        assert_eq!(to_query_string(&next), "integration=ssl&integrationMode=all");
    }

    #[test]
    fn removing_every_chip_yields_default_filters() {
        let mut q = parse_query("q=aws&region=eu&logo=without&integration=kv&ssl=yes&priceMin=1&priceMax=2");
        for chip in active_chips(&q) {
            q = q.without_chip(&chip);
        }
        assert_eq!(q, ListingQuery::default());
    }
}
