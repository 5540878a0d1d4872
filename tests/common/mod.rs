//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use route_persist::config::ServerConfig;
use route_persist::{HttpServer, PersistMode, Router, Shutdown};
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral port with the given strategy.
///
/// The server stops when the returned `Shutdown` is triggered.
pub async fn start_server(router: Router, persist: PersistMode) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServerConfig::default();
    config.listener.bind_address = addr.to_string();
    config.persist = Some(persist);

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, router);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
