use echo_server::{EchoServer, ServerError};
use integration::test_server::TestServer;
use reqwest::{Client, StatusCode};
use serde_json::Value;

#[tokio::test]
async fn health_endpoint_should_answer_get() {
    let server = TestServer::start().await;

    let response = Client::new().get(server.health_url()).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["status"], "ok");
    server.stop().await;
}

#[tokio::test]
async fn api_endpoint_should_echo_message() {
    let server = TestServer::start().await;

    let response = Client::new()
        .post(server.api_url())
        .header("Content-Type", "application/json")
        .body(r#"{"message":"test"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["received"], r#"{"message":"test"}"#);
    server.stop().await;
}

#[tokio::test]
async fn api_endpoint_should_reject_body_without_message() {
    let server = TestServer::start().await;

    let response = Client::new()
        .post(server.api_url())
        .body(r#"{"text":"test"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    server.stop().await;
}

#[tokio::test]
async fn unsupported_method_should_return_405() {
    let server = TestServer::start().await;

    let response = Client::new().put(server.api_url()).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    server.stop().await;
}

#[tokio::test]
async fn binding_an_occupied_port_should_fail() {
    let server = TestServer::start().await;

    let result = EchoServer::bind(&server.address().to_string()).await;

    assert!(matches!(result, Err(ServerError::CannotBind { .. })));
    server.stop().await;
}

#[tokio::test]
async fn cancelled_server_should_stop_accepting_connections() {
    let server = TestServer::start().await;
    let health_url = server.health_url();
    server.stop().await;

    let result = Client::new().get(health_url).send().await;

    assert!(result.is_err());
}
