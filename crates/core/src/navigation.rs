//! Navigation menu and active-section tracking.
//!
//! [`NavigationController`] owns the mobile menu flag and the id of the
//! currently highlighted section. It never touches the DOM: `toggle` and
//! `close` return the [`MenuPresentation`] to apply, and
//! `highlight_active` reports whether the active link changed.

use crate::capability::SmoothScroll;
use crate::result::{OptionExt, ResultExt};

/// A page section as measured on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Distance from the document top, in pixels.
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Classes and locks implied by the menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation {
    /// `active` class on the hamburger and the menu.
    pub menu_active: bool,
    /// `nav-open` class on the body, which blocks page scrolling.
    pub scroll_locked: bool,
}

/// Where a navigation link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `#about`: scroll within the current page.
    Section(String),
    /// Anything else: let the router or browser navigate.
    Page(String),
}

impl LinkTarget {
    #[must_use]
    pub fn classify(href: &str) -> Self {
        href.strip_prefix('#').filter(|id| !id.is_empty()).map_or_else(
            || Self::Page(href.to_string()),
            |id| Self::Section(id.to_string()),
        )
    }
}

/// Id of the last section whose top is at or above `scroll_y + offset`.
///
/// Sections are expected top-to-bottom and non-overlapping; ties resolve to
/// the later section.
#[must_use]
pub fn active_section(sections: &[Section], scroll_y: f64, offset: f64) -> Option<&str> {
    let threshold = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| s.top <= threshold)
        .map(|s| s.id.as_str())
}

/// Scroll position that lands `section_top` just below a fixed header.
#[must_use]
pub fn scroll_target(section_top: f64, scroll_offset: f64) -> f64 {
    (section_top - scroll_offset).max(0.0)
}

/// Scroll depth past which the navbar takes its `scrolled` look.
pub const NAVBAR_SCROLLED_AT: f64 = 100.0;

/// Scroll depth past which the scroll-to-top button shows.
pub const SCROLL_TOP_VISIBLE_AT: f64 = 500.0;

#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AT
}

#[must_use]
pub fn scroll_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AT
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    menu_open: bool,
    lock_scroll: bool,
    highlight_offset: f64,
    scroll_offset: f64,
    active: Option<String>,
}

impl NavigationController {
    #[must_use]
    pub const fn new(lock_scroll: bool, highlight_offset: f64, scroll_offset: f64) -> Self {
        Self {
            menu_open: false,
            lock_scroll,
            highlight_offset,
            scroll_offset,
            active: None,
        }
    }

    /// Flip the menu open/closed.
    pub fn toggle(&mut self) -> MenuPresentation {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "menu toggled");
        self.presentation()
    }

    /// Close the menu, as after a link click.
    pub fn close(&mut self) -> MenuPresentation {
        self.menu_open = false;
        self.presentation()
    }

    #[must_use]
    pub const fn presentation(&self) -> MenuPresentation {
        MenuPresentation {
            menu_active: self.menu_open,
            scroll_locked: self.menu_open && self.lock_scroll,
        }
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recompute the active section for `scroll_y`. Returns `true` when the
    /// highlighted link changes.
    pub fn highlight_active(&mut self, sections: &[Section], scroll_y: f64) -> bool {
        let next = active_section(sections, scroll_y, self.highlight_offset).map(str::to_string);
        if next == self.active {
            return false;
        }
        self.active = next;
        true
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the nav entry linking to `href` should carry `active`.
    #[must_use]
    pub fn is_active_link(&self, href: &str) -> bool {
        match (LinkTarget::classify(href), self.active.as_deref()) {
            (LinkTarget::Section(id), Some(active)) => id == active,
            _ => false,
        }
    }

    /// Handle a nav link click: always close the menu, and for in-page links
    /// scroll to the section. Returns `true` when the click was handled here
    /// and default navigation must be suppressed.
    pub fn follow_link<S: SmoothScroll>(&mut self, href: &str, sections: &[Section], scroll: &S) -> bool {
        self.close();
        match LinkTarget::classify(href) {
            LinkTarget::Section(id) => {
                let section = sections
                    .iter()
                    .find(|s| s.id == id)
                    .required(href)
                    .into_option_logged("nav link");
                if let Some(section) = section {
                    scroll.scroll_to(scroll_target(section.top, self.scroll_offset));
                }
                true
            }
            LinkTarget::Page(_) => false,
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(true, 200.0, 80.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingScroll;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0),
            Section::new("about", 800.0),
            Section::new("contact", 1600.0),
        ]
    }

    #[test]
    fn test_active_section_example() {
        assert_eq!(active_section(&sections(), 850.0, 200.0), Some("about"));
    }

    #[test]
    fn test_active_section_boundaries() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 200.0), Some("home"));
        assert_eq!(active_section(&s, 600.0, 200.0), Some("about"));
        assert_eq!(active_section(&s, 599.0, 200.0), Some("home"));
        assert_eq!(active_section(&s, 5000.0, 200.0), Some("contact"));
    }

    #[test]
    fn test_active_section_none_before_first() {
        let s = vec![Section::new("late", 500.0)];
        assert_eq!(active_section(&s, 0.0, 200.0), None);
        assert_eq!(active_section(&[], 100.0, 200.0), None);
    }

    #[test]
    fn test_toggle_flips_menu_and_scroll_lock() {
        let mut nav = NavigationController::default();
        let opened = nav.toggle();
        assert!(opened.menu_active && opened.scroll_locked);
        let closed = nav.toggle();
        assert!(!closed.menu_active && !closed.scroll_locked);
    }

    #[test]
    fn test_scroll_lock_is_optional() {
        let mut nav = NavigationController::new(false, 200.0, 80.0);
        let opened = nav.toggle();
        assert!(opened.menu_active);
        assert!(!opened.scroll_locked);
    }

    #[test]
    fn test_highlight_reports_changes_only() {
        let mut nav = NavigationController::default();
        assert!(nav.highlight_active(&sections(), 850.0));
        assert!(!nav.highlight_active(&sections(), 900.0));
        assert!(nav.is_active_link("#about"));
        assert!(!nav.is_active_link("#home"));
        assert!(nav.highlight_active(&sections(), 1500.0));
        assert_eq!(nav.active(), Some("contact"));
    }

    #[test]
    fn test_classify_links() {
        assert_eq!(LinkTarget::classify("#about"), LinkTarget::Section("about".into()));
        assert_eq!(LinkTarget::classify("/projects"), LinkTarget::Page("/projects".into()));
        assert_eq!(LinkTarget::classify("#"), LinkTarget::Page("#".into()));
    }

    #[test]
    fn test_follow_section_link_scrolls_and_closes() {
        let mut nav = NavigationController::default();
        nav.toggle();
        let scroll = RecordingScroll::new();

        assert!(nav.follow_link("#contact", &sections(), &scroll));
        assert!(!nav.menu_open());
        assert_eq!(scroll.targets(), vec![1520.0]);
    }

    #[test]
    fn test_follow_page_link_defers_to_router() {
        let mut nav = NavigationController::default();
        nav.toggle();
        let scroll = RecordingScroll::new();

        assert!(!nav.follow_link("/about", &sections(), &scroll));
        assert!(!nav.menu_open());
        assert!(scroll.targets().is_empty());
    }

    #[test]
    fn test_scroll_target_never_negative() {
        assert!((scroll_target(30.0, 80.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_navbar_scrolled_past_threshold() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(100.0));
        assert!(navbar_scrolled(100.5));
    }

    #[test]
    fn test_scroll_to_top_shows_only_when_deep() {
        assert!(!scroll_to_top_visible(120.0));
        assert!(!scroll_to_top_visible(500.0));
        assert!(scroll_to_top_visible(501.0));
    }
}
