//! End-to-end routing tests against a live server.

use std::net::SocketAddr;

use playground_shell::config::ShellConfig;
use playground_shell::shell::Revision;

mod common;

#[tokio::test]
async fn test_locations_resolve_to_one_view() {
    let addr: SocketAddr = "127.0.0.1:28381".parse().unwrap();
    let shell = common::start_shell(addr, ShellConfig::default()).await;
    let client = common::client();

    let cases = [
        ("/", 200, "home"),
        ("/about", 200, "about"),
        ("/about/team", 200, "about"),
        ("/About", 200, "about"),
        ("/aboutus", 404, "not_found"),
        ("/404", 404, "not_found"),
        ("/contact", 404, "not_found"),
        ("/a/b/c?q=/about", 404, "not_found"),
    ];

    for (path, status, view) in cases {
        let res = client.get(shell.url(path)).send().await.expect("Shell unreachable");
        assert_eq!(res.status().as_u16(), status, "{}", path);
        assert_eq!(res.headers()["x-shell-view"], view, "{}", path);
        assert!(res.headers().contains_key("x-request-id"));

        let body = res.text().await.unwrap();
        assert_eq!(body.matches("<main>").count(), 1, "{}", path);
    }
}

#[tokio::test]
async fn test_frame_is_identical_for_every_location() {
    let addr: SocketAddr = "127.0.0.1:28382".parse().unwrap();
    let shell = common::start_shell(addr, ShellConfig::default()).await;
    let client = common::client();

    let mut frames = Vec::new();
    for path in ["/", "/about", "/404", "/elsewhere"] {
        let body = client.get(shell.url(path)).send().await.unwrap().text().await.unwrap();
        let nav_start = body.find("<nav>").unwrap();
        let nav_end = body.find("</nav>").unwrap();
        let footer_start = body.find("<footer>").unwrap();
        let footer_end = body.find("</footer>").unwrap();
        frames.push((
            body[nav_start..nav_end].to_string(),
            body[footer_start..footer_end].to_string(),
        ));
    }

    assert!(frames.windows(2).all(|w| w[0] == w[1]));
    let (nav, footer) = &frames[0];
    assert_eq!(nav.matches("<a ").count(), 4);
    assert!(nav.contains("https://github.com/rxseven/playground-docker"));
    assert!(footer.contains("<code>v0.0.34</code>"));
}

#[tokio::test]
async fn test_first_revision_frame() {
    let addr: SocketAddr = "127.0.0.1:28383".parse().unwrap();
    let mut config = ShellConfig::default();
    config.app.revision = Revision::V1;
    let shell = common::start_shell(addr, config).await;

    let body = common::client()
        .get(shell.url("/about"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("<footer>Footer - v0.0.5</footer>"));
    assert!(body.contains(
        "<nav><a href=\"/\">Home</a> | <a href=\"/about\">About</a> | <a href=\"/404\">404</a></nav>"
    ));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let addr: SocketAddr = "127.0.0.1:28384".parse().unwrap();
    let shell = common::start_shell(addr, ShellConfig::default()).await;
    let client = common::client();

    let first = client.get(shell.url("/about")).send().await.unwrap().text().await.unwrap();
    for _ in 0..3 {
        let again = client.get(shell.url("/about")).send().await.unwrap().text().await.unwrap();
        assert_eq!(again, first);
    }
}
