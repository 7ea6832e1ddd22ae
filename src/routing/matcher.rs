//! Path matching logic.
//!
//! # Responsibilities
//! - Match a location exactly (`/` only renders Home)
//! - Match a location by whole leading path segments (`/about`, `/about/team`)
//! - Match anything (fallback entry)
//!
//! # Design Decisions
//! - ASCII case-insensitive, like browser-side routers by default
//! - Prefixes stop at a segment boundary: `/about` does not match `/aboutus`
//! - Query strings never take part in matching (callers pass the URI path)
//! - No regex; patterns are `'static` so the table can be a constant

/// Trait for matching locations against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the location path matches this pattern.
    fn matches(&self, path: &str) -> bool;
}

/// A single path pattern of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// Location must equal the pattern.
    Exact(&'static str),
    /// Location must equal the pattern or continue it with `/`.
    Prefix(&'static str),
    /// Always matches.
    Any,
}

impl Matcher for PathPattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path.eq_ignore_ascii_case(p),
            PathPattern::Prefix(p) => {
                let Some(head) = path.get(..p.len()) else {
                    return false;
                };
                head.eq_ignore_ascii_case(p) && {
                    let rest = &path[p.len()..];
                    rest.is_empty() || rest.starts_with('/')
                }
            }
            PathPattern::Any => true,
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathPattern::Exact(p) => write!(f, "{} (exact)", p),
            PathPattern::Prefix(p) => write!(f, "{}", p),
            PathPattern::Any => write!(f, "*"),
        }
    }
}
