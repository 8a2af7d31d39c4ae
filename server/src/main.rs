use clap::Parser;
use echo_server::{EchoServer, ServerError};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address the echo server listens on
    #[arg(long, default_value = "127.0.0.1:8080")]
    address: String,
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args = Args::parse();
    Registry::default()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server = EchoServer::bind(&args.address).await?;
    let shutdown = CancellationToken::new();
    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down the echo server...");
                ctrl_c_shutdown.cancel();
            }
            Err(error) => error!("Cannot listen for Ctrl-C: {error}"),
        }
    });

    server.serve(shutdown).await
}
