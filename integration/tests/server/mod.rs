mod concurrency;
mod http_server;
