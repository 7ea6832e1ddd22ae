//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the page handler
//! - Wire up middleware (tracing, timeout, limits, request ID, headers)
//! - Bind server to listener
//! - Resolve each location to a view and respond with the composed page
//! - Swap the composer when a reloaded config arrives

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ShellConfig;
use crate::http::request::{self, RequestIdExt, UuidRequestId, X_REQUEST_ID};
use crate::http::response;
use crate::observability::metrics;
use crate::security;
use crate::shell::Composer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<ArcSwap<Composer>>,
}

/// HTTP server for the application shell.
pub struct HttpServer {
    router: Router,
    config: ShellConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ShellConfig) -> Self {
        let composer = Composer::from_config(&config.app);
        let state = AppState {
            inner: Arc::new(ArcSwap::from_pointee(composer)),
        };

        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ShellConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state);

        if config.security.enable_headers {
            router = security::headers::apply(router);
        }

        router
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until `shutdown` fires. Each config received on
    /// `config_updates` replaces the nav bar and footer; listener, timeout
    /// and security settings only change on restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<ShellConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            revision = %self.config.app.revision,
            "HTTP server starting"
        );

        let inner = self.state.inner.clone();
        let reloader = tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                let composer = Composer::from_config(&new_config.app);
                tracing::info!(
                    revision = %composer.revision(),
                    footer = %composer.footer().text,
                    "Shell configuration applied"
                );
                inner.store(Arc::new(composer));
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Page handler.
/// Resolves the location, composes the shell around the matched view.
async fn page_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let path = request.uri().path();

    let composer = state.inner.load();
    let (view, document) = composer.render_document(path);
    let status = response::status_for(view);

    tracing::debug!(
        request_id = %request.request_id(),
        path = %path,
        view = %view,
        status = status.as_u16(),
        "Rendered page"
    );
    metrics::record_page(view, status.as_u16(), start_time);

    response::page(view, document)
}
