use crate::value::{
    contains_marker, identity_key, is_finite_number, is_finite_number_or_null, is_present, render,
};
use crate::violation::Violation;
use crate::vocabulary::Vocabulary;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

const PRICE_FIELDS: [&str; 2] = ["price_eur", "price_usd"];
const OPTIONAL_NUMBER_FIELDS: [&str; 3] = ["storage_gb", "traffic_gb", "domains"];

/// Check every plan against every rule, then every top provider for coverage.
///
/// Violations are returned in plan order followed by top-provider order.
pub fn validate(providers: &[Value], plans: &[Value], vocab: &Vocabulary) -> Vec<Violation> {
    let provider_ids: HashSet<String> = providers
        .iter()
        .filter_map(|p| identity_key(p.get("id")))
        .collect();

    let mut seen_plan_ids: HashSet<String> = HashSet::new();
    let mut violations = Vec::new();

    for plan in plans {
        let plan_label = render(plan.get("id"));

        let repeated = identity_key(plan.get("id")).is_some_and(|key| !seen_plan_ids.insert(key));
        if repeated {
            violations.push(Violation::DuplicatePlanId {
                plan: plan_label.clone(),
            });
        }

        let known_provider =
            identity_key(plan.get("provider_id")).is_some_and(|key| provider_ids.contains(&key));
        if !known_provider {
            violations.push(Violation::UnknownProvider {
                plan: plan_label.clone(),
                provider_id: render(plan.get("provider_id")),
            });
        }

        for field in PRICE_FIELDS {
            if !is_finite_number(plan.get(field)) {
                violations.push(Violation::InvalidPrice {
                    field,
                    plan: plan_label.clone(),
                    value: render(plan.get(field)),
                });
            }
        }

        for field in OPTIONAL_NUMBER_FIELDS {
            if !is_finite_number_or_null(plan.get(field)) {
                violations.push(Violation::InvalidOptionalNumber {
                    field,
                    plan: plan_label.clone(),
                    value: render(plan.get(field)),
                });
            }
        }

        check_tags(plan, &plan_label, vocab, &mut violations);

        let top_provider = plan
            .get("provider_id")
            .and_then(Value::as_str)
            .is_some_and(|id| vocab.is_top_provider(id));
        if top_provider {
            if contains_marker(plan.get("notes"), &vocab.placeholder_marker) {
                violations.push(Violation::PlaceholderNotes {
                    plan: plan_label.clone(),
                });
            }
            if !is_present(plan.get("last_verified_at")) {
                violations.push(Violation::MissingLastVerified {
                    plan: plan_label.clone(),
                });
            }
        }
    }

    for provider_id in &vocab.top_providers {
        let has_plans = plans.iter().any(|plan| {
            plan.get("provider_id").and_then(Value::as_str) == Some(provider_id.as_str())
        });
        if !has_plans {
            violations.push(Violation::TopProviderWithoutPlans {
                provider_id: provider_id.clone(),
            });
        }
    }

    debug!(
        providers = providers.len(),
        plans = plans.len(),
        violations = violations.len(),
        "validated catalog"
    );
    violations
}

fn check_tags(plan: &Value, plan_label: &str, vocab: &Vocabulary, out: &mut Vec<Violation>) {
    let Some(Value::Array(tags)) = plan.get("integration_tags") else {
        out.push(Violation::TagsNotArray {
            plan: plan_label.to_string(),
        });
        return;
    };

    for tag in tags {
        let allowed = tag.as_str().is_some_and(|t| vocab.is_allowed_tag(t));
        if !allowed {
            out.push(Violation::InvalidTag {
                plan: plan_label.to_string(),
                tag: render(Some(tag)),
            });
        }
    }
}
