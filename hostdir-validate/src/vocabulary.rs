use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closed set of integration tags a plan may carry.
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "git",
    "ci/cd",
    "edge",
    "cdn",
    "serverless",
    "api",
    "database",
    "backup",
    "docker",
    "kv",
    "ssl",
];

/// Providers held to stricter completeness rules.
pub const DEFAULT_TOP_PROVIDERS: &[&str] = &[
    "aws",
    "microsoft-azure",
    "google-cloud",
    "cloudflare",
    "vercel",
    "netlify",
    "render",
    "railway",
    "heroku",
    "fly-io",
];

/// Note text left behind by seed data.
pub const DEFAULT_PLACEHOLDER_MARKER: &str = "Placeholder data for prototype";

/// Fixed vocabularies the rules check against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub allowed_tags: BTreeSet<String>,

    /// Checked and reported in this order.
    pub top_providers: Vec<String>,

    pub placeholder_marker: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_TAGS.iter().copied(),
            DEFAULT_TOP_PROVIDERS.iter().copied(),
            DEFAULT_PLACEHOLDER_MARKER,
        )
    }
}

impl Vocabulary {
    /// Build a vocabulary; duplicate top providers keep their first position.
    pub fn new<T, P>(allowed_tags: T, top_providers: P, placeholder_marker: &str) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut top: Vec<String> = Vec::new();
        for id in top_providers {
            let id = id.into();
            if !top.contains(&id) {
                top.push(id);
            }
        }

        Self {
            allowed_tags: allowed_tags.into_iter().map(Into::into).collect(),
            top_providers: top,
            placeholder_marker: placeholder_marker.to_string(),
        }
    }

    pub fn is_allowed_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    pub fn is_top_provider(&self, provider_id: &str) -> bool {
        self.top_providers.iter().any(|id| id == provider_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_has_fixed_sets() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.allowed_tags.len(), 11);
        assert_eq!(vocab.top_providers.len(), 10);
        assert!(vocab.is_allowed_tag("ci/cd"));
        assert!(!vocab.is_allowed_tag("quantum"));
        assert!(vocab.is_top_provider("fly-io"));
        assert!(!vocab.is_top_provider("hetzner"));
    }

    #[test]
    fn duplicate_top_providers_keep_first_position() {
        let vocab = Vocabulary::new(["git"], ["b", "a", "b"], "x");
        assert_eq!(vocab.top_providers, vec!["b", "a"]);
    }
}
