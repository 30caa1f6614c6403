/// Region assigned to providers that do not declare one.
pub const DEFAULT_REGION: &str = "global";

/// Trim and lowercase a region; missing or blank regions become [`DEFAULT_REGION`].
pub fn normalize_region(region: Option<&str>) -> String {
    let normalized = region.unwrap_or(DEFAULT_REGION).trim().to_lowercase();
    if normalized.is_empty() {
        DEFAULT_REGION.to_string()
    } else {
        normalized
    }
}
