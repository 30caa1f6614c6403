use thiserror::Error;

/// One broken rule. `Display` gives the line printed in the validation report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Reported on the second and every later occurrence.
    #[error("Duplicate plan id: {plan}")]
    DuplicatePlanId { plan: String },

    #[error("Unknown provider_id on {plan}: {provider_id}")]
    UnknownProvider { plan: String, provider_id: String },

    #[error("Invalid {field} on {plan}: {value}")]
    InvalidPrice {
        field: &'static str,
        plan: String,
        value: String,
    },

    #[error("Invalid {field} on {plan}: {value}")]
    InvalidOptionalNumber {
        field: &'static str,
        plan: String,
        value: String,
    },

    #[error("integration_tags must be an array on {plan}")]
    TagsNotArray { plan: String },

    #[error("Invalid integration tag on {plan}: {tag}")]
    InvalidTag { plan: String, tag: String },

    #[error("Top-10 plan still has placeholder notes: {plan}")]
    PlaceholderNotes { plan: String },

    #[error("Missing last_verified_at for top-10 plan: {plan}")]
    MissingLastVerified { plan: String },

    #[error("Top-10 provider has no plans: {provider_id}")]
    TopProviderWithoutPlans { provider_id: String },
}
