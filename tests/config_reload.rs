//! Configuration reload and shutdown behavior.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use playground_shell::config::{ConfigWatcher, ShellConfig};
use playground_shell::shell::Revision;

mod common;

#[tokio::test]
async fn test_reload_swaps_footer_without_restart() {
    let addr: SocketAddr = "127.0.0.1:28481".parse().unwrap();
    let shell = common::start_shell(addr, ShellConfig::default()).await;
    let client = common::client();

    let body = client.get(shell.url("/")).send().await.unwrap().text().await.unwrap();
    assert!(body.contains("<code>v0.0.34</code>"));

    let mut updated = ShellConfig::default();
    updated.app.revision = Revision::V1;
    updated.app.footer_text = Some("Footer - v0.0.6".into());
    shell.config_tx.send(updated).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    let body = client.get(shell.url("/")).send().await.unwrap().text().await.unwrap();
    assert!(body.contains("<footer>Footer - v0.0.6</footer>"));
    assert!(!body.contains("target=\"_blank\""));

    // Route table is unaffected by reloads.
    let res = client.get(shell.url("/about/x")).send().await.unwrap();
    assert_eq!(res.headers()["x-shell-view"], "about");
}

#[tokio::test]
async fn test_shutdown_stops_server() {
    let addr: SocketAddr = "127.0.0.1:28482".parse().unwrap();
    let shell = common::start_shell(addr, ShellConfig::default()).await;
    let client = common::client();

    assert!(client.get(shell.url("/")).send().await.is_ok());

    shell.shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(300)).await;

    assert!(client.get(shell.url("/")).send().await.is_err());
}

fn scratch_config(initial: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("shell-watch-{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("shell.toml");
    fs::write(&path, initial).unwrap();
    (dir, path)
}

#[tokio::test]
async fn test_watcher_sends_valid_edits_and_drops_invalid_ones() {
    let (dir, path) = scratch_config("[app]\nfooter_text = \"v0.0.1\"\n");
    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _handle = watcher
        .with_debounce(Duration::from_millis(100))
        .run()
        .unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    fs::write(&path, "[app]\nfooter_text = \"v7.7.7\"\n").unwrap();
    let config = tokio::time::timeout(Duration::from_secs(5), updates.recv())
        .await
        .expect("reload not delivered")
        .unwrap();
    assert_eq!(config.app.footer_text.as_deref(), Some("v7.7.7"));

    // Rejected by validation; the current config stays in place.
    fs::write(&path, "[timeouts]\nrequest_secs = 0\n").unwrap();
    let nothing = tokio::time::timeout(Duration::from_millis(1500), updates.recv()).await;
    assert!(nothing.is_err());

    let _ = fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_watcher_follows_rename_over_save() {
    let (dir, path) = scratch_config("[app]\nrevision = \"v2\"\n");
    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _handle = watcher
        .with_debounce(Duration::from_millis(100))
        .run()
        .unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;

    // Editors often write a sibling file and rename it over the original.
    let staged = dir.join(".shell.toml.swp");
    fs::write(&staged, "[app]\nrevision = \"v1\"\n").unwrap();
    fs::rename(&staged, &path).unwrap();

    let config = tokio::time::timeout(Duration::from_secs(5), updates.recv())
        .await
        .expect("reload not delivered")
        .unwrap();
    assert_eq!(config.app.revision, Revision::V1);

    // A second save with the same content is not delivered again.
    fs::write(&path, "[app]\nrevision = \"v1\"\n").unwrap();
    let nothing = tokio::time::timeout(Duration::from_millis(1500), updates.recv()).await;
    assert!(nothing.is_err());

    let _ = fs::remove_dir_all(dir);
}
