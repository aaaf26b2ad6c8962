//! Image reference rewrite through the image proxy.

use catalog_core::config::ImageProxyConfig;
use url::form_urlencoded;

/// Absolute `http(s)` URLs become proxy-fetch references; relative paths
/// pass through; blank becomes the placeholder.
pub fn proxied_image(url: Option<&str>, config: &ImageProxyConfig) -> String {
    let url = url.map(str::trim).unwrap_or_default();
    if url.is_empty() {
        return config.placeholder.clone();
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("url", url)
            .append_pair("width", &config.width.to_string())
            .append_pair("height", &config.height.to_string())
            .append_pair("quality", &config.quality.to_string())
            .append_pair("format", &config.format)
            .finish();
        return format!("{}?{query}", config.endpoint);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_proxied() {
        let out = proxied_image(
            Some("https://cdn.example.com/a b.jpg?x=1&y=2"),
            &ImageProxyConfig::default(),
        );
        assert_eq!(
            out,
            "/api/image-proxy?url=https%3A%2F%2Fcdn.example.com%2Fa+b.jpg%3Fx%3D1%26y%3D2\
             &width=400&height=400&quality=80&format=webp"
        );
    }

    #[test]
    fn relative_paths_pass_through_and_blank_is_placeholder() {
        let config = ImageProxyConfig::default();
        assert_eq!(proxied_image(Some(" /uploads/x.png "), &config), "/uploads/x.png");
        assert_eq!(proxied_image(Some("  "), &config), "/api/placeholder/300/300");
        assert_eq!(proxied_image(None, &config), "/api/placeholder/300/300");
    }
}
