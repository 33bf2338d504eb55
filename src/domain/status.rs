use super::types::{FeatureFlags, PublicConfigResponse};

/// Labels for every server-side secret that is not configured yet
pub fn missing_configuration(config: &PublicConfigResponse) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !config.api_key_configured {
        missing.push("API key");
    }
    if !config.openai_configured {
        missing.push("OpenAI API key");
    }
    missing
}

/// Join with list grammar: "A", "A and B", "A, B and C"
pub fn join_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// Alert text for missing configuration, if anything is missing
pub fn missing_configuration_alert(config: &PublicConfigResponse) -> Option<String> {
    let missing = missing_configuration(config);
    if missing.is_empty() {
        return None;
    }
    Some(format!(
        "{} not configured on the server.",
        join_list(&missing)
    ))
}

pub struct FeatureInfo {
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: fn(&FeatureFlags) -> bool,
}

pub const FEATURES: &[FeatureInfo] = &[
    FeatureInfo {
        label: "Redis caching",
        description: "Caches AI responses to cut repeat generation costs",
        enabled: |f| f.redis_enabled,
    },
    FeatureInfo {
        label: "Anthropic provider",
        description: "Secondary AI provider for content generation",
        enabled: |f| f.anthropic_enabled,
    },
    FeatureInfo {
        label: "Webhooks",
        description: "Outbound event notifications to automation services",
        enabled: |f| f.webhooks_configured,
    },
    FeatureInfo {
        label: "Budget enforcement",
        description: "Blocks generation once the monthly budget is spent",
        enabled: |f| f.budget_enforced,
    },
    FeatureInfo {
        label: "Daily limit",
        description: "Caps the number of generations per day",
        enabled: |f| f.daily_limit_enforced,
    },
];

/// Feature rows in display order with their current state
pub fn feature_status(flags: &FeatureFlags) -> Vec<(&'static FeatureInfo, bool)> {
    FEATURES.iter().map(|f| (f, (f.enabled)(flags))).collect()
}
