//! Configuration file watcher for hot reload.
//!
//! # Design Decisions
//! - Watches the parent directory and filters by file name, so editors that
//!   save by writing a temp file and renaming it over the original still
//!   trigger a reload
//! - A burst of events is coalesced into one reload after a quiet period
//! - Content identical to the last seen file is not reloaded again

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc as std_mpsc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::parse_config;
use crate::config::schema::ShellConfig;
use crate::observability::metrics;

const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<ShellConfig>,
    debounce: Duration,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<ShellConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
                debounce: DEFAULT_DEBOUNCE,
            },
            update_rx,
        )
    }

    /// Quiet period that must pass after the last event before reloading.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Start watching. Reloads run on a dedicated thread.
    ///
    /// The returned handle must be kept alive for as long as reloads are
    /// wanted; dropping it also stops the reload thread.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file_name: Option<OsString> = self.path.file_name().map(ToOwned::to_owned);
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (event_tx, event_rx) = std_mpsc::channel::<()>();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let touches_file = event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == file_name.as_deref());
                    if touches_file && (event.kind.is_modify() || event.kind.is_create()) {
                        let _ = event_tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let last_seen = fs::read_to_string(&self.path).ok();
        let reloader = Reloader {
            path: self.path.clone(),
            update_tx: self.update_tx,
            debounce: self.debounce,
            last_seen,
        };
        std::thread::Builder::new()
            .name("config-reload".into())
            .spawn(move || reloader.run(event_rx))
            .map_err(notify::Error::io)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

struct Reloader {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<ShellConfig>,
    debounce: Duration,
    last_seen: Option<String>,
}

impl Reloader {
    fn run(mut self, events: std_mpsc::Receiver<()>) {
        while events.recv().is_ok() {
            while events.recv_timeout(self.debounce).is_ok() {}

            let content = match fs::read_to_string(&self.path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = ?self.path, error = %e, "Config file unreadable, skipping reload");
                    continue;
                }
            };
            if self.last_seen.as_deref() == Some(content.as_str()) {
                tracing::debug!(path = ?self.path, "Config content unchanged");
                continue;
            }

            tracing::info!("Config file change detected, reloading...");
            let parsed = parse_config(&content);
            self.last_seen = Some(content);
            match parsed {
                Ok(new_config) => {
                    metrics::record_reload("loaded");
                    if self.update_tx.send(new_config).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    metrics::record_reload("rejected");
                    tracing::error!(
                        "Failed to reload config: {}. Keeping current configuration.",
                        e
                    );
                }
            }
        }
        tracing::debug!(path = ?self.path, "Config reload thread stopped");
    }
}
