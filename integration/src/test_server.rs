use echo_server::EchoServer;
use loadtest::configs::test_config::TestConfig;
use loadtest::utils::duration::LoadDuration;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Echo server on a random local port, stopped with [`TestServer::stop`] or on drop.
pub struct TestServer {
    address: SocketAddr,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let server = EchoServer::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind the echo server");
        let address = server.local_addr().expect("Failed to get local address");
        let shutdown = CancellationToken::new();
        let server_shutdown = shutdown.clone();
        let handle = tokio::spawn(async move {
            server
                .serve(server_shutdown)
                .await
                .expect("Echo server failed");
        });
        Self {
            address,
            shutdown,
            handle: Some(handle),
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.address)
    }

    pub fn health_url(&self) -> String {
        format!("http://{}/health", self.address)
    }

    /// Config pointing at this server with the embedded target disabled.
    pub fn config(&self, users: u32, duration: LoadDuration) -> TestConfig {
        let mut config = TestConfig {
            concurrent_users: users,
            duration,
            target_url: self.api_url(),
            health_url: self.health_url(),
            ..Default::default()
        };
        config.bootstrap.embedded_server = false;
        config
    }

    pub async fn stop(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.handle.take() {
            handle.await.expect("Echo server task panicked");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Port nothing listens on once the probe listener is dropped.
pub fn unused_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|address| address.port())
        .expect("Failed to find an unused port")
}
