//! Behavioral tests for routes and navigation links

use std::collections::HashSet;

use folio_core::LinkTarget;

use crate::components::nav_bar::PAGE_LINKS;
use crate::content::HOME_SECTIONS;
use crate::router::routes;

// ============================================================================
// ROUTE CONSTANT BEHAVIORS
// ============================================================================

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let all = [
        routes::HOME,
        routes::ABOUT,
        routes::PROJECTS,
        routes::EXPERIENCE,
        routes::ACHIEVEMENTS,
        routes::CONTACT,
    ];

    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "All routes should be unique");
}

#[test]
fn given_route_constants_except_home_when_checked_then_clean_paths() {
    for route in [
        routes::ABOUT,
        routes::PROJECTS,
        routes::EXPERIENCE,
        routes::ACHIEVEMENTS,
        routes::CONTACT,
    ] {
        assert!(route.starts_with('/'), "{route} should start with /");
        assert!(!route.ends_with('/'), "{route} should not end with /");
    }
}

// ============================================================================
// LINK CLASSIFICATION BEHAVIORS
// ============================================================================

#[test]
fn given_nav_bar_links_when_classified_then_all_are_page_links() {
    for (label, path) in PAGE_LINKS {
        assert!(
            matches!(LinkTarget::classify(path), LinkTarget::Page(_)),
            "{label} should navigate, not scroll"
        );
    }
}

#[test]
fn given_home_section_links_when_classified_then_all_scroll_in_page() {
    for (label, href) in HOME_SECTIONS {
        assert!(
            matches!(LinkTarget::classify(href), LinkTarget::Section(_)),
            "{label} should scroll to its section"
        );
    }
}
