use integration::test_server::TestServer;
use reqwest::{Client, StatusCode};
use test_case::test_case;
use tokio::task::JoinSet;

#[test_case(10 ; "ten clients")]
#[test_case(50 ; "fifty clients")]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_posts_should_all_be_echoed(clients: usize) {
    let server = TestServer::start().await;
    let mut requests = JoinSet::new();
    for id in 0..clients {
        let url = server.api_url();
        requests.spawn(async move {
            Client::new()
                .post(url)
                .header("Content-Type", "application/json")
                .body(format!(r#"{{"message":"client {id}"}}"#))
                .send()
                .await
                .unwrap()
                .status()
        });
    }

    let statuses = requests.join_all().await;

    assert_eq!(statuses.len(), clients);
    assert!(statuses.iter().all(|status| *status == StatusCode::OK));
    server.stop().await;
}

#[tokio::test]
async fn health_and_api_should_share_the_handler() {
    let server = TestServer::start().await;
    let client = Client::new();

    let health = client.get(server.health_url()).send().await.unwrap();
    let api = client.get(server.api_url()).send().await.unwrap();

    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(api.status(), StatusCode::OK);
    assert_eq!(health.text().await.unwrap(), api.text().await.unwrap());
}
