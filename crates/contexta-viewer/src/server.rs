use crate::config::ViewerConfig;
use crate::middleware::{propagate_correlation_id, provide_viewer};
use crate::resolver::{QueryNameResolver, ViewerResolver};
use crate::routes::{health_routes, viewer_routes};
use crate::{Result, ViewerError};
use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use contexta_observability::spans;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{Instrument, info};

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn ViewerResolver>,
    pub guest_name: Arc<str>,
}

impl AppState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            resolver: Arc::new(QueryNameResolver),
            guest_name: Arc::from(config.guest_name.as_str()),
        }
    }

    pub fn with_resolver(mut self, resolver: impl ViewerResolver) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(viewer_routes())
        .route_layer(from_fn_with_state(state.clone(), provide_viewer))
        .with_state(state)
        .merge(health_routes())
        .layer(from_fn(propagate_correlation_id))
}

/// Serve on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    let span = spans::serve(addr);
    info!(parent: &span, "Starting viewer server on http://{}", addr);

    axum::serve(listener, build_router(state))
        .into_future()
        .instrument(span)
        .await
        .map_err(ViewerError::Io)
}

pub async fn start_server(config: &ViewerConfig) -> Result<()> {
    config.validate()?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ViewerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    serve(listener, AppState::new(config)).await
}
