use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::config::CorsConfig;
use crate::error::{MockError, Result};

pub const ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK: HeaderName =
    HeaderName::from_static("access-control-allow-private-network");

/// Fixed cross-origin headers attached to every response.
///
/// Unlike `tower_http::cors::CorsLayer` these are sent unconditionally, with or
/// without an `Origin` on the request.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    headers: HeaderMap,
}

impl CorsPolicy {
    pub fn from_config(cfg: &CorsConfig) -> Result<Self> {
        let origin = HeaderValue::from_str(&cfg.allow_origin)
            .map_err(|e| MockError::Config(format!("invalid cors.allow_origin: {e}")))?;
        Ok(Self::with_origin(origin))
    }

    fn with_origin(origin: HeaderValue) -> Self {
        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK,
            HeaderValue::from_static("true"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        Self { headers }
    }

    pub fn headers(&self) -> HeaderMap {
        self.headers.clone()
    }

    /// Overwrites any same-named header already present in `target`.
    pub fn apply(&self, target: &mut HeaderMap) {
        for (name, value) in &self.headers {
            target.insert(name.clone(), value.clone());
        }
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::with_origin(HeaderValue::from_static("vscode-file://vscode-app"))
    }
}
