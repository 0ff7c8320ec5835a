//! Behavior tests for the static-response listener

use tokio::sync::oneshot;

use fixture_hello::GREETING;

/// Mount the fixture router on an ephemeral port. The returned sender
/// keeps the server alive; dropping it shuts the listener down.
async fn spawn_app() -> (String, oneshot::Sender<()>) {
    let listener = fixture_core::bind(0).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(fixture_core::serve(
        listener,
        fixture_hello::router(),
        async {
            let _ = shutdown_rx.await;
        },
    ));

    (format!("http://127.0.0.1:{}", port), shutdown_tx)
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let (base, _shutdown) = spawn_app().await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING);
}

#[tokio::test]
async fn test_every_path_returns_greeting() {
    let (base, _shutdown) = spawn_app().await;

    for path in ["/index.html", "/deeply/nested/path", "/favicon.ico"] {
        let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), GREETING);
    }
}

#[tokio::test]
async fn test_non_get_methods_return_greeting() {
    let (base, _shutdown) = spawn_app().await;

    let client = reqwest::Client::new();
    let response = client.post(format!("{}/", base)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), GREETING);
}
