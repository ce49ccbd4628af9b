use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub planner: PlannerInfo,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerInfo {
    pub name: String,
}

/// Values filled in when a new trip does not specify them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default: see the config template written by `vy init`
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Default: see the config template written by `vy init`
    #[serde(default = "default_cover_image")]
    pub cover_image: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            currency: default_currency(),
            cover_image: default_cover_image(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_cover_image() -> String {
    FALLBACK_COVER_IMAGE.to_string()
}

/// Cover used when a trip is created without one and no default is configured
pub const FALLBACK_COVER_IMAGE: &str = "https://picsum.photos/seed/adventure/1200/800";

/// Cover images offered when creating or editing a trip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub images: Vec<String>,
}
