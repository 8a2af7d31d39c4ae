mod load_test;
mod server;
