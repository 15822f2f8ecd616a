// Configuration module

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::options::Quality;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgproxyConfig {
    /// Public base URL of the imgproxy deployment; empty disables rewriting
    #[serde(default)]
    pub imgproxy_url: String,

    /// Hex-encoded signing key; empty generates unsigned URLs
    #[serde(default)]
    pub key: String,

    /// Hex-encoded signing salt; empty generates unsigned URLs
    #[serde(default)]
    pub salt: String,

    /// Quality used when a request carries no explicit quality (default: 80)
    #[serde(default = "default_quality")]
    pub default_quality: u8,

    /// Per-format quality spec such as `jpeg=80,webp=70`; when non-empty it
    /// takes precedence over `default_quality`
    #[serde(default)]
    pub format_quality: String,

    /// Let the proxy negotiate the output format (default: true); when off,
    /// explicitly requested formats surface as a URL extension
    #[serde(default = "default_auto_format")]
    pub auto_format: bool,

    /// Media types eligible for proxying, keyed by MIME type
    #[serde(default = "default_media_types")]
    pub media_types: HashMap<String, MediaTypeConfig>,

    /// Static asset rewriting
    #[serde(default)]
    pub static_resources: StaticResourceConfig,
}

impl Default for ImgproxyConfig {
    fn default() -> Self {
        Self {
            imgproxy_url: String::new(),
            key: String::new(),
            salt: String::new(),
            default_quality: 80,
            format_quality: String::new(),
            auto_format: true,
            media_types: default_media_types(),
            static_resources: StaticResourceConfig::default(),
        }
    }
}

impl ImgproxyConfig {
    /// Rewriting needs a proxy deployment to point at.
    pub fn is_enabled(&self) -> bool {
        !self.imgproxy_url.is_empty()
    }

    /// Media types absent from the map are disabled.
    pub fn is_media_type_enabled(&self, media_type: &str) -> bool {
        self.media_types
            .get(media_type)
            .map(|m| m.enabled)
            .unwrap_or(false)
    }

    /// Quality applied when the caller supplies none: the per-format spec
    /// when configured, the numeric default otherwise.
    pub fn fallback_quality(&self) -> Quality {
        if !self.format_quality.is_empty() {
            Quality::FormatSpec(self.format_quality.clone())
        } else {
            Quality::Numeric(self.default_quality)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaTypeConfig {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticResourceConfig {
    /// Rewrite static asset URLs (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// Regex for source URLs to leave untouched; empty matches nothing
    #[serde(default)]
    pub ignore_pattern: String,
}

fn default_quality() -> u8 {
    80
}

fn default_auto_format() -> bool {
    true
}

fn default_media_types() -> HashMap<String, MediaTypeConfig> {
    let mut types = HashMap::new();
    for mime in ["image/jpeg", "image/png", "image/gif", "image/webp"] {
        types.insert(mime.to_string(), MediaTypeConfig { enabled: true });
    }
    types
}
