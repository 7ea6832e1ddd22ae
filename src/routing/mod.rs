//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location (URI path)
//!     → router.rs (ordered scan of the route table)
//!     → matcher.rs (exact / prefix / wildcard)
//!     → Return: exactly one View
//!
//! Route table:
//!     "/"       exact   → Home
//!     "/about"  prefix  → About
//!     *                 → NotFound (always last)
//! ```
//!
//! # Design Decisions
//! - Routes fixed at compile time, immutable at runtime
//! - No regex (prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins; precedence comes from order, not pattern complexity

pub mod matcher;
pub mod router;

pub use matcher::{Matcher, PathPattern};
pub use router::{resolve, Route, RouteTable, ROUTES};
