use serde::{Deserialize, Serialize};

use super::defaults;

/// Parameters of the image-proxy rewrite applied to absolute image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProxyConfig {
    /// Path of the proxy-fetch endpoint.
    pub endpoint: String,
    pub width: u32,
    pub height: u32,
    pub quality: u32,
    pub format: String,
    /// Used when a row carries no image at all.
    pub placeholder: String,
}

impl Default for ImageProxyConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_PROXY_ENDPOINT.to_string(),
            width: defaults::DEFAULT_PROXY_WIDTH,
            height: defaults::DEFAULT_PROXY_HEIGHT,
            quality: defaults::DEFAULT_PROXY_QUALITY,
            format: defaults::DEFAULT_PROXY_FORMAT.to_string(),
            placeholder: defaults::DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}
