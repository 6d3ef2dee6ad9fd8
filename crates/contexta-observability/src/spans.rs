//! Span helpers for contexta services.
//!
//! All span names use the `contexta.` namespace prefix for low cardinality.

use crate::correlation::CORRELATION;
use std::net::SocketAddr;
use tracing::Span;

fn correlation_field() -> String {
    CORRELATION.with(|id| {
        id.as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string)
    })
}

/// Create span for the lifetime of a listening server.
#[inline]
pub fn serve(addr: SocketAddr) -> Span {
    tracing::info_span!("contexta.serve", addr = %addr)
}

/// Create span for one inbound HTTP request.
///
/// Parent: serve
/// Children: provide_viewer
#[inline]
pub fn http_request(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "contexta.http_request",
        method = method,
        path = path,
        correlation_id = correlation_field(),
    )
}

/// Create span for binding the viewer of a request.
///
/// Parent: http_request
#[inline]
pub fn provide_viewer() -> Span {
    tracing::debug_span!(
        "contexta.provide_viewer",
        correlation_id = correlation_field(),
    )
}

/// Create span for resolving the viewer from request data.
///
/// Parent: provide_viewer
#[inline]
pub fn resolve_viewer(resolver: &str) -> Span {
    tracing::debug_span!("contexta.resolve_viewer", resolver = resolver)
}
