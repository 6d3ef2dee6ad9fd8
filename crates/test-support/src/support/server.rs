//! Running the viewer server on an ephemeral port.

use contexta_viewer::{AppState, ViewerConfig, serve};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A viewer server listening on `127.0.0.1`, stopped when dropped.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<contexta_viewer::Result<()>>,
}

impl TestServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_viewer(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    let handle = tokio::spawn(serve(listener, state));
    TestServer { addr, handle }
}

pub async fn spawn_default_viewer() -> TestServer {
    spawn_viewer(AppState::new(&ViewerConfig::default())).await
}
