//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (defaults when no file is given)
//! - Initialize logging, then metrics
//! - Start the config watcher
//! - Bind the listener last, so traffic only arrives when ready
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::net::SocketAddr;
use std::path::PathBuf;

use notify::RecommendedWatcher;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::{load_config, ConfigError, ConfigWatcher, ShellConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::{logging, metrics};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("metrics: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("config watcher: {0}")]
    Watcher(#[from] notify::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// TOML file to load and watch. Defaults apply when absent.
    pub config_path: Option<PathBuf>,
    /// Overrides `listener.bind_address`.
    pub bind_address: Option<String>,
}

/// A started, not yet serving, shell.
pub struct Running {
    pub server: HttpServer,
    pub listener: TcpListener,
    pub config_updates: mpsc::UnboundedReceiver<ShellConfig>,
    /// Kept alive so reloads keep flowing.
    _watcher: Option<RecommendedWatcher>,
}

impl Running {
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` is triggered.
    pub async fn serve(self, shutdown: &Shutdown) -> std::io::Result<()> {
        let Running {
            server,
            listener,
            config_updates,
            _watcher,
        } = self;
        let result = server.run(listener, config_updates, shutdown.subscribe()).await;
        drop(_watcher);
        result
    }
}

/// Resolve the effective configuration for `opts`.
pub fn resolve_config(opts: &StartupOptions) -> Result<ShellConfig, ConfigError> {
    let mut config = match &opts.config_path {
        Some(path) => load_config(path)?,
        None => ShellConfig::default(),
    };
    if let Some(addr) = &opts.bind_address {
        config.listener.bind_address = addr.clone();
    }
    Ok(config)
}

pub async fn start(opts: StartupOptions) -> Result<Running, StartupError> {
    let config = resolve_config(&opts)?;

    logging::init(&config.observability)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?opts.config_path,
        "playground-shell starting"
    );
    tracing::info!(
        bind_address = %config.listener.bind_address,
        revision = %config.app.revision,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse().map_err(|_| {
            ConfigError::Validation(vec![crate::config::ValidationError::MetricsAddress(
                config.observability.metrics_address.clone(),
            )])
        })?;
        metrics::init_metrics(addr)?;
    }

    let (watcher, config_updates) = match &opts.config_path {
        Some(path) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            (Some(watcher.run()?), rx)
        }
        None => {
            let (_, rx) = mpsc::unbounded_channel();
            (None, rx)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    Ok(Running {
        server: HttpServer::new(config),
        listener,
        config_updates,
        _watcher: watcher,
    })
}
