//! Runs the smoke scenarios against a real server bound to an ephemeral port.

use bfhl_client::{BfhlClient, run_all};
use bfhl_server::AppState;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(bfhl_server::serve_listener(
            listener,
            AppState::default(),
            async move {
                let _ = rx.await;
            },
        ));

        Self {
            base_url,
            shutdown: Some(tx),
            handle,
        }
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn test_all_scenarios_pass_against_live_server() {
    let server = TestServer::start().await;
    let client = BfhlClient::new(&server.base_url);

    let reports = run_all(&client).await;
    assert_eq!(reports.len(), 5);
    for report in &reports {
        assert!(report.passed(), "{report}");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_status_endpoint_over_http() {
    let server = TestServer::start().await;
    let client = BfhlClient::new(format!("{}/", server.base_url));

    let response = client.status().await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["status"], "active");

    server.stop().await;
}

#[tokio::test]
async fn test_rejection_over_http() {
    let server = TestServer::start().await;
    let client = BfhlClient::new(&server.base_url);

    let response = client.classify(&json!({"data": "abc"})).await.unwrap();
    assert_eq!(response.status, 400);
    assert_eq!(response.is_success_flag(), Some(false));

    server.stop().await;
}
