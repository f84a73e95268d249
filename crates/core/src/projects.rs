//! Project card filtering and social profile links.

use std::fmt;

/// Active filter on the projects page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a `data-filter` value. `"all"` and the empty string select
    /// everything; tags compare case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(value.to_ascii_lowercase())
        }
    }

    /// Whether a card tagged with `categories` stays visible.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => categories
                .iter()
                .any(|c| c.as_ref().eq_ignore_ascii_case(wanted)),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(tag) => tag,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Indices of the cards visible under `filter`.
pub fn visible_indices<'a, I, S>(filter: &CategoryFilter, cards: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a [S]>,
    S: AsRef<str> + 'a,
{
    cards
        .into_iter()
        .enumerate()
        .filter(|(_, categories)| filter.matches(*categories))
        .map(|(i, _)| i)
        .collect()
}

/// Debounce window for the project search box.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Case-insensitive substring search over a card's title, description, and
/// technology tags. An empty term matches every card.
#[must_use]
pub fn matches_search<S: AsRef<str>>(term: &str, title: &str, description: &str, technologies: &[S]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&term)
        || description.to_lowercase().contains(&term)
        || technologies
            .iter()
            .any(|t| t.as_ref().to_lowercase().contains(&term))
}

/// What clicking a social icon does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialAction {
    Open(String),
    /// No profile yet; show this message instead.
    Announce(String),
}

/// Resolve a social platform name against the known profiles.
#[must_use]
pub fn social_action(platform: &str, profiles: &[(&str, &str)]) -> SocialAction {
    profiles
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(platform))
        .map_or_else(
            || SocialAction::Announce(format!("{} profile will be available soon!", capitalize(platform))),
            |(_, url)| SocialAction::Open((*url).to_string()),
        )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.trim().chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILES: &[(&str, &str)] = &[
        ("github", "https://github.com/folio-site"),
        ("linkedin", "https://www.linkedin.com/in/folio-site"),
    ];

    #[test]
    fn test_all_matches_everything() {
        let filter = CategoryFilter::parse("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches::<&str>(&[]));
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let filter = CategoryFilter::parse("Web");
        assert!(filter.matches(&["web", "rust"]));
        assert!(!filter.matches(&["mobile"]));
        assert_eq!(filter.to_string(), "web");
    }

    #[test]
    fn test_visible_indices() {
        let cards: Vec<Vec<&str>> = vec![vec!["web"], vec!["ml"], vec!["web", "ml"]];
        let filter = CategoryFilter::parse("ml");
        assert_eq!(visible_indices(&filter, cards.iter().map(Vec::as_slice)), vec![1, 2]);
        assert_eq!(
            visible_indices(&CategoryFilter::All, cards.iter().map(Vec::as_slice)),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_search_covers_title_description_and_tags() {
        let tags = ["Rust", "WebAssembly"];
        assert!(matches_search("", "Folio", "", &tags));
        assert!(matches_search("FOL", "Folio", "", &tags));
        assert!(matches_search("portfolio", "Folio", "A portfolio site", &tags));
        assert!(matches_search("wasm", "Folio", "", &["wasm-bindgen"]));
        assert!(!matches_search("python", "Folio", "A portfolio site", &tags));
    }

    #[test]
    fn test_known_platform_opens_profile() {
        assert_eq!(
            social_action("GitHub", PROFILES),
            SocialAction::Open("https://github.com/folio-site".into())
        );
    }

    #[test]
    fn test_unknown_platform_is_announced() {
        assert_eq!(
            social_action("twitter", PROFILES),
            SocialAction::Announce("Twitter profile will be available soon!".into())
        );
    }
}
