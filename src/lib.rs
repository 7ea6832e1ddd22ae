//! Playground application shell.
//!
//! Serves a fixed three-route table (Home, About, NotFound) framed by a
//! navigation bar and a footer that shows a configured version literal.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;
pub mod shell;

pub use config::schema::ShellConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::resolve;
pub use shell::{Composer, View};
