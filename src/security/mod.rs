//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response
//!     → headers.rs (nosniff, frame denial, referrer policy)
//! Incoming request
//!     → body limit (tower-http, sized from SecurityConfig)
//! ```

pub mod headers;
