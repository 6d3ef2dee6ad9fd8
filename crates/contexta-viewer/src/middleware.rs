//! Request middleware that binds per-request context.

use crate::resolver::ViewerQuery;
use crate::server::AppState;
use crate::viewer::VIEWER;
use crate::Result;
use axum::extract::{Query, Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use contexta_observability::correlation::CORRELATION;
use contexta_observability::{CorrelationId, spans};
use tracing::{Instrument, debug};

pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// Bind a correlation ID for the rest of the request and echo it back.
///
/// An incoming `x-correlation-id` header is reused; otherwise a fresh ID is
/// generated.
pub async fn propagate_correlation_id(request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(CORRELATION_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(CorrelationId::from)
        .unwrap_or_else(CorrelationId::generate);
    let header = HeaderValue::from_str(id.as_str()).ok();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = CORRELATION
        .scope(Some(id), async move {
            let span = spans::http_request(&method, &path);
            next.run(request).instrument(span).await
        })
        .await;

    if let Some(header) = header {
        response.headers_mut().insert(CORRELATION_HEADER, header);
    }
    response
}

/// Resolve the request's viewer and run the remaining pipeline with it bound.
pub async fn provide_viewer(
    State(state): State<AppState>,
    Query(query): Query<ViewerQuery>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let span = spans::provide_viewer();
    let viewer = state
        .resolver
        .resolve(&query)
        .instrument(spans::resolve_viewer(state.resolver.name()))
        .await?;
    debug!(
        parent: &span,
        viewer = viewer.as_ref().map(|user| user.name.as_str()).unwrap_or("anonymous"),
        "viewer resolved"
    );

    Ok(VIEWER.scope(viewer, next.run(request)).instrument(span).await)
}
