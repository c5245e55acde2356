use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::header::HOST;
use axum::http::request::Parts;
use chrono::Local;

use crate::logging::{InboundRequest, UNKNOWN_CLIENT};

/// Captures what the record needs from the request head and the buffered body.
///
/// `fallback_host` is used for the full URL when the request carries no
/// `Host` header.
pub fn capture(parts: &Parts, body: &[u8], fallback_host: &str) -> InboundRequest {
    let client = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

    let host = parts
        .headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback_host);
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let headers = parts
        .headers
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                String::from_utf8_lossy(v.as_bytes()).into_owned(),
            )
        })
        .collect();

    InboundRequest {
        received_at: Local::now(),
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        full_url: format!("http://{host}{path_and_query}"),
        client,
        headers,
        body: String::from_utf8_lossy(body).into_owned(),
        query: parts.uri.query().unwrap_or("").to_string(),
    }
}
