use crate::types::NewsItem;

/// Pure relevance predicate: an item is relevant iff at least one
/// keyword, case-folded, occurs as a substring of the lower-cased
/// concatenation of title and description.
///
/// Matching is deliberately substring-based, not word-boundary based;
/// the keyword lists this was built for rely on it ("Fond" is meant to
/// match "Fonds" too).
pub fn is_relevant(item: &NewsItem, keywords: &[String]) -> bool {
    let haystack = format!(
        "{} {}",
        item.title.to_lowercase(),
        item.description.as_deref().unwrap_or("").to_lowercase()
    );
    keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, description: Option<&str>) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            link: "https://example.org/x".to_string(),
            description: description.map(|s| s.to_string()),
        }
    }

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_relevant(
            &item("Neue ETFs gelistet", None),
            &keywords(&["etf"])
        ));
        assert!(is_relevant(
            &item("abgeltungssteuer angepasst", None),
            &keywords(&["Abgeltungssteuer"])
        ));
    }

    #[test]
    fn matching_is_substring_not_word_boundary() {
        // "Fond" embedded in "Fonds" still matches
        assert!(is_relevant(
            &item("Neue Fonds aufgelegt", None),
            &keywords(&["Fond"])
        ));
    }

    #[test]
    fn non_matching_title_is_not_relevant() {
        assert!(!is_relevant(&item("Neues Update", None), &keywords(&["ETC"])));
    }

    #[test]
    fn description_alone_can_match() {
        assert!(is_relevant(
            &item("Pressemitteilung", Some("Hinweise zur Quellensteuer")),
            &keywords(&["Quellensteuer"])
        ));
    }

    #[test]
    fn missing_description_is_treated_as_empty() {
        assert!(!is_relevant(
            &item("Pressemitteilung", None),
            &keywords(&["Quellensteuer"])
        ));
    }

    #[test]
    fn no_keywords_means_nothing_is_relevant() {
        assert!(!is_relevant(&item("Neue ETFs", None), &keywords(&[])));
    }
}
