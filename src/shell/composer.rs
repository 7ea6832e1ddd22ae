//! Page composition.
//!
//! # Responsibilities
//! - Resolve the location to one view
//! - Render that view into the main content slot
//! - Frame it with the location-invariant nav bar and footer
//!
//! # Design Decisions
//! - Pure: no state changes on compose, so re-rendering never drifts
//! - Layout built once per config; reload builds a fresh composer

use std::sync::Arc;

use maud::{html, Markup, PreEscaped};

use crate::config::AppConfig;
use crate::routing::{RouteTable, ROUTES};
use crate::shell::html::document;
use crate::shell::layout::{Footer, NavBar};
use crate::shell::revision::{Revision, DEFAULT_SOURCE_URL};
use crate::shell::view::{PageRenderer, StaticPages, View};

/// A composed page, sections kept apart for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub view: View,
    /// Name of the matched route entry.
    pub route: &'static str,
    pub nav: String,
    pub main: String,
    pub footer: String,
}

impl RenderedPage {
    /// Body markup in fixed order: nav, main, footer.
    pub fn body(&self) -> Markup {
        html! {
            (PreEscaped(&self.nav))
            main { (PreEscaped(&self.main)) }
            (PreEscaped(&self.footer))
        }
    }

    pub fn into_document(self, title: &str) -> String {
        let title = format!("{} - {}", self.view.title(), title);
        document(&title, self.body()).into_string()
    }
}

/// Composes the shell around the view matched for a location.
#[derive(Clone)]
pub struct Composer {
    table: &'static RouteTable,
    revision: Revision,
    title: String,
    nav: NavBar,
    footer: Footer,
    pages: Arc<dyn PageRenderer>,
}

impl Composer {
    /// Build with the placeholder pages.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_pages(config, Arc::new(StaticPages))
    }

    /// Build with externally supplied page bodies.
    pub fn with_pages(config: &AppConfig, pages: Arc<dyn PageRenderer>) -> Self {
        let revision = config.revision;
        let source_url = config.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL);
        Self {
            table: &ROUTES,
            revision,
            title: config.title.clone(),
            nav: revision.nav_bar(source_url),
            footer: revision.footer(config.footer_text.as_deref()),
            pages,
        }
    }

    pub fn compose(&self, path: &str) -> RenderedPage {
        let route = self.table.resolve(path);
        RenderedPage {
            view: route.view,
            route: route.name,
            nav: self.nav.render().into_string(),
            main: self.pages.render(route.view).into_string(),
            footer: self.footer.render().into_string(),
        }
    }

    /// Compose and wrap into a full HTML document.
    pub fn render_document(&self, path: &str) -> (View, String) {
        let page = self.compose(path);
        let view = page.view;
        (view, page.into_document(&self.title))
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("revision", &self.revision)
            .field("title", &self.title)
            .field("nav", &self.nav)
            .field("footer", &self.footer)
            .finish_non_exhaustive()
    }
}
