//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing table, middleware)
//!     → request.rs (request ID generation)
//!     → proxy / health / docs handlers
//!     → cors.rs (response header injection)
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod server;

pub use request::{ProxyRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
