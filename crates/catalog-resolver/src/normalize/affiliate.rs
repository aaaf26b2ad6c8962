use catalog_core::models::ContentItem;
use tracing::warn;

use super::first_json_string;

/// First non-blank of the three affiliate columns, else the first entry of
/// the JSON `affiliate_urls` list. A malformed list is logged and ignored.
pub fn affiliate_url(item: &ContentItem) -> Option<String> {
    let direct = [
        item.affiliate_url.as_deref(),
        item.affiliate_url_camel.as_deref(),
        item.affiliate_link.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|url| !url.is_empty());
    if let Some(url) = direct {
        return Some(url.to_string());
    }

    let raw = item.affiliate_urls.as_deref()?;
    match first_json_string(raw) {
        Ok(url) => url,
        Err(e) => {
            warn!(id = item.id, error = %e, "ignoring malformed affiliate_urls");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_then_json_list() {
        let mut item = ContentItem {
            affiliate_link: Some("https://c".into()),
            affiliate_urls: Some(r#"["https://d"]"#.into()),
            ..Default::default()
        };
        assert_eq!(affiliate_url(&item).as_deref(), Some("https://c"));
        item.affiliate_url_camel = Some("https://b".into());
        assert_eq!(affiliate_url(&item).as_deref(), Some("https://b"));
        item.affiliate_url = Some(" ".into());
        assert_eq!(affiliate_url(&item).as_deref(), Some("https://b"));

        let listed = ContentItem {
            affiliate_urls: Some(r#"["", "https://d"]"#.into()),
            ..Default::default()
        };
        assert_eq!(affiliate_url(&listed).as_deref(), Some("https://d"));
    }

    #[test]
    fn malformed_list_is_ignored() {
        let item = ContentItem {
            affiliate_urls: Some("[not json".into()),
            ..Default::default()
        };
        assert_eq!(affiliate_url(&item), None);
    }
}
