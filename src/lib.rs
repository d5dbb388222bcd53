//! CORS-enabled pass-through proxy for the Comick API.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌────────────────────────────────────────────┐
//!                         │                COMICK PROXY                 │
//!                         │                                             │
//!     Client Request      │  ┌─────────┐    ┌─────────┐   ┌─────────┐  │
//!     ────────────────────┼─▶│  http   │───▶│  proxy  │──▶│ reqwest │──┼──▶ api.comick.dev
//!                         │  │ server  │    │ forward │   │ client  │  │
//!                         │  └─────────┘    └─────────┘   └─────────┘  │
//!                         │       │                                    │
//!                         │       ├──▶ health  (upstream probe)        │
//!                         │       └──▶ docs    (static reference page) │
//!                         │                                             │
//!                         │  ┌───────────────────────────────────────┐ │
//!                         │  │         Cross-Cutting Concerns         │ │
//!                         │  │  ┌────────┐ ┌───────────┐ ┌─────────┐ │ │
//!                         │  │  │ config │ │ lifecycle │ │ logging │ │ │
//!                         │  │  └────────┘ └───────────┘ └─────────┘ │ │
//!                         │  └───────────────────────────────────────┘ │
//!                         └────────────────────────────────────────────┘
//! ```
//!
//! The proxy is a stateless relay: every `/api/*` request is rewritten onto
//! the configured upstream base URL and the response is returned verbatim
//! with permissive CORS headers attached.

pub mod config;
pub mod docs;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
