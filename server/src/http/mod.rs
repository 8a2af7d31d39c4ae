pub mod diagnostics;
pub mod echo;
pub mod http_server;
