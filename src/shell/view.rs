//! The views a location can resolve to, and the seam that renders them.

use maud::{html, Markup};
use serde::Serialize;

/// Page selected for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    About,
    NotFound,
}

impl View {
    /// Stable identifier used in logs, metrics and the `x-shell-view` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::NotFound => "not_found",
        }
    }

    /// Human readable title.
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::NotFound => "Not Found",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces the markup placed in the main content slot.
///
/// The page bodies are supplied from outside the shell; the composer only
/// decides *which* view to render.
pub trait PageRenderer: Send + Sync {
    fn render(&self, view: View) -> Markup;
}

/// Placeholder markup for each view.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPages;

impl PageRenderer for StaticPages {
    fn render(&self, view: View) -> Markup {
        let body = match view {
            View::Home => "Welcome to the playground.",
            View::About => "A small shell with three pages.",
            View::NotFound => "Nothing lives at this address.",
        };
        html! {
            h1 { (view.title()) }
            p { (body) }
        }
    }
}
