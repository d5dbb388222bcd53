//! Request forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound /api/{*path} request
//!     → forward.rs (URL rewrite onto upstream base)
//!     → shared reqwest client (single attempt, no retries)
//!     → verbatim relay of status, body, content-type
//!     → CORS headers attached
//! ```
//!
//! # Design Decisions
//! - The fallible part lives in an internal "attempt forward" operation;
//!   the handler alone translates any error kind into the fixed 500 body
//! - Upstream non-success statuses are relayed, not treated as errors
//! - `OPTIONS` short-circuits before any upstream call is made

pub mod forward;

pub use forward::{forward_handler, preflight_handler, ForwardError};
