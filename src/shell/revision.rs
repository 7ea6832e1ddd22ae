//! Shell revision presets.
//!
//! V1: three in-app links, plain `Footer - v0.0.5`.
//! V2: adds the external source link, monospaced `v0.0.34`.

use serde::{Deserialize, Serialize};

use crate::shell::layout::{Footer, FooterStyle, NavBar, NavLink};

pub const DEFAULT_SOURCE_URL: &str = "https://github.com/rxseven/playground-docker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    V1,
    #[default]
    V2,
}

impl Revision {
    /// Footer literal shipped with this revision.
    pub fn default_footer_text(&self) -> &'static str {
        match self {
            Revision::V1 => "Footer - v0.0.5",
            Revision::V2 => "v0.0.34",
        }
    }

    pub fn footer_style(&self) -> FooterStyle {
        match self {
            Revision::V1 => FooterStyle::Plain,
            Revision::V2 => FooterStyle::Monospace,
        }
    }

    /// Build the nav bar. `source_url` is only used by V2.
    pub fn nav_bar(&self, source_url: &str) -> NavBar {
        let mut links = vec![
            NavLink::internal("Home", "/"),
            NavLink::internal("About", "/about"),
            NavLink::internal("404", "/404"),
        ];
        if *self == Revision::V2 {
            links.push(NavLink::external("GitHub", source_url));
        }
        NavBar::new(links)
    }

    /// Build the footer, preferring a configured literal.
    pub fn footer(&self, text_override: Option<&str>) -> Footer {
        let text = text_override.unwrap_or(self.default_footer_text());
        Footer::new(text, self.footer_style())
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::V1 => write!(f, "v1"),
            Revision::V2 => write!(f, "v2"),
        }
    }
}
