//! Route table
//!
//! Every page has a clean URL; anything else renders [`NotFound`]. The host
//! serves `index.html` for unknown paths, so deep links reach this router.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::NavBar;
use crate::pages::{About, Achievements, Contact, Experience, Home, NotFound, Projects};

/// Route paths
pub mod routes {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
    pub const PROJECTS: &str = "/projects";
    pub const EXPERIENCE: &str = "/experience";
    pub const ACHIEVEMENTS: &str = "/achievements";
    pub const CONTACT: &str = "/contact";
}

/// Navigation bar and the routed page.
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=Home />
                    <Route path=StaticSegment("about") view=About />
                    <Route path=StaticSegment("projects") view=Projects />
                    <Route path=StaticSegment("experience") view=Experience />
                    <Route path=StaticSegment("achievements") view=Achievements />
                    <Route path=StaticSegment("contact") view=Contact />
                </Routes>
            </main>
        </Router>
    }
}
