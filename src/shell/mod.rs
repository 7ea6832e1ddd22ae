//! Application shell subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig (revision, footer literal, source url)
//!     → revision.rs (nav links + footer preset)
//!     → composer.rs (built once per config)
//!
//! Per location:
//!     composer.compose(path)
//!     → routing::ROUTES.resolve(path) → View
//!     → view.rs PageRenderer renders the main slot
//!     → layout.rs nav bar + footer around it
//!     → RenderedPage
//! ```

pub mod composer;
pub mod html;
pub mod layout;
pub mod revision;
pub mod view;

pub use composer::{Composer, RenderedPage};
pub use layout::{Footer, FooterStyle, LinkTarget, NavBar, NavLink};
pub use revision::Revision;
pub use view::{PageRenderer, StaticPages, View};
