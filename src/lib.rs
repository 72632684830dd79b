//! Support code for the workspace end-to-end tests.
//!
//! Starts the real server on an ephemeral loopback port and stops it
//! gracefully once a test is done.

use std::net::SocketAddr;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use todo_api::{server::ServerError, ApiServer, ServerConfig};

/// A server listening on `127.0.0.1` with an OS-assigned port
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    /// Bind and start serving on a fresh in-memory store
    pub async fn start() -> Self {
        let server = ApiServer::new(ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            ..ServerConfig::default()
        });
        let listener = server.bind().await.expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    /// Absolute URL for a request path
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger graceful shutdown and wait for the server task
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle
            .await
            .expect("server task panicked")
            .expect("server exited with an error");
    }
}
