use axum::Router;
use reqwest::Url;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::TestAppClient;

/// A router served on an ephemeral port. Dropping the handle drops the
/// shutdown sender, which stops the server as well.
pub struct TestAppHandle {
    pub address: Url,
    shutdown: oneshot::Sender<()>,
    server_task: JoinHandle<()>,
}

impl TestAppHandle {
    pub fn client(&self) -> TestAppClient {
        TestAppClient::new(self.address.clone())
    }

    /// Waits for in-flight requests to finish before returning.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        self.server_task.await.unwrap();
    }
}

pub async fn spawn_test_app(app: Router) -> TestAppHandle {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        shutdown_rx.await.ok();
    });

    let server_task = tokio::spawn(async move {
        if let Err(e) = server.await {
            eprintln!("todo_api test server stopped with error: {e:?}");
        }
    });

    TestAppHandle {
        address: Url::parse(&format!("http://{addr}")).unwrap(),
        shutdown: shutdown_tx,
        server_task,
    }
}
