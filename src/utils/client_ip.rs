//! Client address extraction for click events.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;

/// Resolves the client address a click should be attributed to.
///
/// Defaults to the socket peer address. When `behind_proxy` is set (the
/// service runs behind a trusted reverse proxy), the first entry of
/// `X-Forwarded-For` wins, falling back to `X-Real-IP` and finally the
/// peer. Header values that do not parse as an IP address are ignored.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy
        && let Some(forwarded) = forwarded_ip(headers)
    {
        return forwarded.to_string();
    }

    peer.ip().to_string()
}

fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    if let Some(value) = headers.get("x-forwarded-for")
        && let Ok(list) = value.to_str()
        && let Some(first) = list.split(',').next()
        && let Ok(ip) = first.trim().parse()
    {
        return Some(ip);
    }

    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
