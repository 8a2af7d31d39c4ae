use integration::test_server::{unused_port, TestServer};
use loadtest::client::http::HttpClientFactory;
use loadtest::configs::test_config::TestConfig;
use loadtest::runner::LoadTestRunner;
use loadtest::utils::duration::LoadDuration;
use loadtest_report::report::Report;
use serial_test::serial;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

async fn run(config: TestConfig) -> Report {
    let factory = Arc::new(HttpClientFactory::from_config(&config).unwrap());
    LoadTestRunner::new(config, factory).run().await.unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn run_against_echo_server_should_only_record_successes() {
    let server = TestServer::start().await;
    let config = server.config(3, LoadDuration::from_secs(2));

    let report = run(config).await;

    assert!(report.total_requests > 0);
    assert_eq!(report.failed_requests, 0);
    assert_eq!(report.successful_requests, report.total_requests);
    assert_eq!(report.success_rate, 100.0);
    assert!(report.duration_actual_secs >= 2.0);
    assert!(report.duration_actual_secs < 8.0);
    assert!(report.throughput_rps > 0.0);
    assert_eq!(report.params.concurrent_users, 3);

    let latency = report.latency;
    let min = latency.min_latency_ms.unwrap();
    let max = latency.max_latency_ms.unwrap();
    let avg = latency.avg_latency_ms.unwrap();
    let median = latency.median_latency_ms.unwrap();
    assert!(min <= avg && avg <= max);
    assert!(min <= median && median <= max);
    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn run_against_closed_port_should_only_record_failures() {
    let port = unused_port();
    let mut config = TestConfig {
        concurrent_users: 2,
        duration: LoadDuration::from_secs(1),
        target_url: format!("http://127.0.0.1:{port}/api"),
        health_url: format!("http://127.0.0.1:{port}/health"),
        ..Default::default()
    };
    config.bootstrap.embedded_server = false;

    let report = run(config).await;

    assert!(report.total_requests > 0);
    assert_eq!(report.successful_requests, 0);
    assert_eq!(report.failed_requests, report.total_requests);
    assert_eq!(report.success_rate, 0.0);
    assert_eq!(report.latency.min_latency_ms, None);
    assert_eq!(report.latency.max_latency_ms, None);
    assert_eq!(report.latency.median_latency_ms, None);
    assert_eq!(report.latency.avg_latency_ms, Some(0.0));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn rejected_requests_should_count_as_failures_with_latency() {
    let server = TestServer::start().await;
    let mut config = server.config(2, LoadDuration::from_secs(1));
    config.request_body = r#"{"text":"no field"}"#.to_owned();

    let report = run(config).await;

    assert!(report.total_requests > 0);
    assert_eq!(report.successful_requests, 0);
    assert_eq!(report.failed_requests, report.total_requests);
    assert!(report.latency.min_latency_ms.is_some());
    assert!(report.latency.median_latency_ms.is_some());
    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn shutdown_should_end_the_run_early() {
    let server = TestServer::start().await;
    let config = server.config(2, LoadDuration::from_secs(30));
    let factory = Arc::new(HttpClientFactory::from_config(&config).unwrap());
    let shutdown = CancellationToken::new();
    let runner = LoadTestRunner::new(config, factory).with_shutdown(shutdown.clone());

    let cancel = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        shutdown.cancel();
    });
    let report = runner.run().await.unwrap();
    cancel.await.unwrap();

    assert!(report.duration_actual_secs < 10.0);
    assert!(report.total_requests > 0);
    assert_eq!(report.failed_requests, 0);
    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[serial]
async fn report_should_be_written_as_json() {
    let server = TestServer::start().await;
    let config = server.config(1, LoadDuration::from_millis(500));
    let output_dir = tempfile::tempdir().unwrap();

    let report = run(config).await;
    let path = report.dump_to_json(&output_dir.path().join("results")).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["total_requests"], report.total_requests);
    assert_eq!(json["failed_requests"], 0);
    assert_eq!(json["params"]["concurrent_users"], 1);
    assert_eq!(json["params"]["target_url"], server.api_url());
    server.stop().await;
}
