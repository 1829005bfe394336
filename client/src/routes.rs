//! Route table for the four top-level views.
//!
//! `App` registers one `<Route>` per entry using `segment()`, and the navbar
//! renders its links from `View::ALL` and marks the active one through
//! `from_path`, so both stay in the same order. The server redirects
//! trailing-slash paths, so exact matching holds for every rendered page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A routable top-level view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Projects,
    Contact,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [View; 4] = [View::Home, View::About, View::Projects, View::Contact];

    /// Absolute path the view is served at.
    pub const fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::About => "/about",
            View::Projects => "/projects",
            View::Contact => "/contact",
        }
    }

    /// Path segment for the router (`""` for the root).
    pub const fn segment(self) -> &'static str {
        match self {
            View::Home => "",
            View::About => "about",
            View::Projects => "projects",
            View::Contact => "contact",
        }
    }

    /// Navbar link text.
    pub const fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Projects => "Projects",
            View::Contact => "Contact",
        }
    }

    /// Match a path exactly against the route table.
    pub fn from_path(path: &str) -> Option<View> {
        View::ALL.into_iter().find(|view| view.path() == path)
    }
}
