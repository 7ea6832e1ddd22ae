//! Navigation bar and footer.
//!
//! Both are built once from configuration and rendered identically for
//! every location.

use maud::{html, Markup};

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-app location, same browsing context.
    Internal,
    /// Off-site page, new browsing context.
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub target: LinkTarget,
}

impl NavLink {
    pub fn internal(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            target: LinkTarget::Internal,
        }
    }

    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            target: LinkTarget::External,
        }
    }

    pub fn render(&self) -> Markup {
        match self.target {
            LinkTarget::Internal => html! {
                a href=(self.href) { (self.label) }
            },
            LinkTarget::External => html! {
                a href=(self.href) target="_blank" rel="noopener noreferrer" { (self.label) }
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn render(&self) -> Markup {
        html! {
            nav {
                @for (i, link) in self.links.iter().enumerate() {
                    @if i > 0 { " | " }
                    (link.render())
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterStyle {
    Plain,
    Monospace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub style: FooterStyle,
}

impl Footer {
    pub fn new(text: impl Into<String>, style: FooterStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            footer {
                @match self.style {
                    FooterStyle::Plain => { (self.text) }
                    FooterStyle::Monospace => { code { (self.text) } }
                }
            }
        }
    }
}
