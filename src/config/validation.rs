//! Configuration validation.
//!
//! Semantic checks that serde cannot express: address syntax, URL shape,
//! value ranges. All violations are collected and reported together, not
//! just the first one.

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic violation in the configuration.
#[derive(Debug)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g. "upstream.base_url").
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!(
                "not a valid socket address: {:?}",
                config.listener.bind_address
            ),
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError {
                    field: "upstream.base_url",
                    message: format!("unsupported scheme: {:?}", url.scheme()),
                });
            } else if url.host_str().is_none() {
                errors.push(ValidationError {
                    field: "upstream.base_url",
                    message: "missing host".to_string(),
                });
            }
        }
        Err(e) => {
            errors.push(ValidationError {
                field: "upstream.base_url",
                message: format!("not a valid URL: {e}"),
            });
        }
    }

    if config.upstream.user_agent.is_empty() {
        errors.push(ValidationError {
            field: "upstream.user_agent",
            message: "must not be empty".to_string(),
        });
    }

    if !config.upstream.health_probe_path.starts_with('/') {
        errors.push(ValidationError {
            field: "upstream.health_probe_path",
            message: "must start with '/'".to_string(),
        });
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.connect_secs",
            message: "must be at least 1".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
