use integration::test_server::{unused_port, TestServer};
use loadtest::bootstrap::ensure_target_ready;
use loadtest::client::http::HttpClientFactory;
use loadtest::configs::test_config::TestConfig;
use loadtest::error::LoadTestError;
use loadtest::runner::LoadTestRunner;
use loadtest::utils::duration::LoadDuration;
use serial_test::serial;
use std::sync::Arc;

fn config_for_port(port: u16, embedded_server: bool) -> TestConfig {
    let mut config = TestConfig {
        concurrent_users: 2,
        duration: LoadDuration::from_secs(1),
        target_url: format!("http://127.0.0.1:{port}/api"),
        health_url: format!("http://127.0.0.1:{port}/health"),
        ..Default::default()
    };
    config.bootstrap.embedded_server = embedded_server;
    config.bootstrap.attempts = 3;
    config.bootstrap.interval = LoadDuration::from_millis(100);
    config
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn embedded_server_should_serve_the_whole_run() {
    let config = config_for_port(unused_port(), true);

    let embedded = ensure_target_ready(&config)
        .await
        .unwrap()
        .expect("embedded server should have been started");
    let factory = Arc::new(HttpClientFactory::from_config(&config).unwrap());
    let report = LoadTestRunner::new(config, factory).run().await.unwrap();
    embedded.shutdown().await;

    assert!(report.total_requests > 0);
    assert_eq!(report.failed_requests, 0);
}

#[tokio::test]
#[serial]
async fn already_running_target_should_not_start_embedded_server() {
    let server = TestServer::start().await;
    let config = config_for_port(server.address().port(), true);

    let embedded = ensure_target_ready(&config).await.unwrap();

    assert!(embedded.is_none());
    server.stop().await;
}

#[tokio::test]
#[serial]
async fn missing_target_without_embedded_server_should_fail() {
    let config = config_for_port(unused_port(), false);

    let error = ensure_target_ready(&config).await.unwrap_err();

    assert!(matches!(
        error,
        LoadTestError::TargetUnreachable { attempts: 3, .. }
    ));
}
