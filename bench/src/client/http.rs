use crate::client::{ClientFactory, TargetClient};
use crate::configs::test_config::TestConfig;
use crate::error::{LoadTestError, TransportError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct HttpClientFactory {
    url: Url,
    body: String,
    timeout: Duration,
}

impl HttpClientFactory {
    pub fn new(url: Url, body: String, timeout: Duration) -> Self {
        Self { url, body, timeout }
    }

    pub fn from_config(config: &TestConfig) -> Result<Self, LoadTestError> {
        Ok(Self::new(
            config.target_url()?,
            config.request_body.clone(),
            config.request_timeout.get_duration(),
        ))
    }
}

#[async_trait]
impl ClientFactory for HttpClientFactory {
    async fn create_client(&self) -> Result<Box<dyn TargetClient>, LoadTestError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(1)
            .tcp_nodelay(true)
            .no_proxy()
            .build()
            .map_err(LoadTestError::CannotCreateClient)?;

        Ok(Box::new(HttpTargetClient {
            client,
            url: self.url.clone(),
            body: self.body.clone(),
        }))
    }
}

pub struct HttpTargetClient {
    client: Client,
    url: Url,
    body: String,
}

#[async_trait]
impl TargetClient for HttpTargetClient {
    async fn send_request(&self) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(self.body.clone())
            .send()
            .await?;
        let status = response.status().as_u16();
        // The body is part of the measured round trip. Once the status line is
        // in, a broken body still counts as a response.
        if let Err(error) = response.bytes().await {
            debug!("Reading the body of a {status} response failed: {error}");
        }
        Ok(status)
    }
}
