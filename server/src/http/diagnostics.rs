use axum::body::Body;
use axum::{
    extract::ConnectInfo,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time::Instant;
use tracing::{debug, warn};

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

pub async fn request_diagnostics(
    ConnectInfo(ip_address): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let request_id = REQUEST_ID.fetch_add(1, Ordering::Relaxed);
    debug!(
        "Processing a request {} {} with ID: {request_id} from client with IP address: {ip_address}...",
        request.method(),
        request.uri().path(),
    );
    let now = Instant::now();
    let response = next.run(request).await;
    let status = response.status();
    if status != StatusCode::NOT_FOUND && status >= StatusCode::BAD_REQUEST {
        warn!("Returning status code: {status}, IP address: {ip_address}, request ID: {request_id}");
    }
    debug!(
        "Processed a request with ID: {request_id} from client with IP address: {ip_address} in {} µs.",
        now.elapsed().as_micros()
    );
    response
}
