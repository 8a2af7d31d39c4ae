pub mod http;
pub mod server_error;

pub use http::echo::router;
pub use http::http_server::EchoServer;
pub use server_error::ServerError;
