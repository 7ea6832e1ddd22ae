//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use playground_shell::config::ShellConfig;
use playground_shell::http::HttpServer;
use playground_shell::lifecycle::Shutdown;
use tokio::sync::mpsc;

/// A shell server running on a background task.
#[allow(dead_code)]
pub struct TestShell {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub config_tx: mpsc::UnboundedSender<ShellConfig>,
}

impl TestShell {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestShell {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the shell on `addr` with `config`.
pub async fn start_shell(addr: SocketAddr, mut config: ShellConfig) -> TestShell {
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let (config_tx, config_updates) = mpsc::unbounded_channel();
    let server = HttpServer::new(config);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(200)).await;

    TestShell {
        addr,
        shutdown,
        config_tx,
    }
}

/// Client without connection pooling or proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
