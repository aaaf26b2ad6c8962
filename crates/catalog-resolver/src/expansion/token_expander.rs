//! Raw category/page text → ordered, deduplicated lowercase tokens.

use super::SynonymTable;

/// Split `raw` into source tokens.
///
/// Lowercases, turns `/` and whitespace into spaces, strips everything
/// outside `[a-z0-9 &-]`, then splits on spaces, `&` and `-`.
pub fn tokenize(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            '/' => Some(' '),
            c if c.is_whitespace() => Some(' '),
            'a'..='z' | '0'..='9' | ' ' | '&' | '-' => Some(c),
            _ => None,
        })
        .collect();

    let mut tokens: Vec<String> = Vec::new();
    for token in cleaned.split([' ', '&', '-']) {
        if !token.is_empty() && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Source tokens followed by their direct synonyms, first occurrence kept.
/// Empty or symbol-only input yields no tokens.
pub fn expand(raw: &str, table: &SynonymTable) -> Vec<String> {
    let source = tokenize(raw);
    let mut expanded = source.clone();
    for token in &source {
        for synonym in table.synonyms_of(token) {
            if !expanded.contains(synonym) {
                expanded.push(synonym.clone());
            }
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use catalog_core::config::SynonymConfig;

    use super::*;

    #[test]
    fn splits_on_separators_and_strips_symbols() {
        assert_eq!(
            tokenize("Electronics & Gadgets"),
            vec!["electronics", "gadgets"]
        );
        assert_eq!(tokenize("TV/Audio"), vec!["tv", "audio"]);
        assert_eq!(tokenize("click-picks"), vec!["click", "picks"]);
        assert_eq!(tokenize("Men's Shoes!"), vec!["mens", "shoes"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("&&--!!").is_empty());
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        assert_eq!(tokenize("apps & AI apps"), vec!["apps", "ai"]);
    }

    #[test]
    fn synonyms_follow_source_tokens() {
        let table = SynonymTable::from_config(&SynonymConfig::default());
        assert_eq!(
            expand("Smart TV", &table),
            vec!["smart", "tv", "television", "televisions"]
        );
    }
}
