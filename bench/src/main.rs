use clap::Parser;
use loadtest::args::LoadTestArgs;
use loadtest::bootstrap::ensure_target_ready;
use loadtest::client::http::HttpClientFactory;
use loadtest::configs::config_provider::{ConfigProvider, FileConfigProvider};
use loadtest::configs::validators::Validatable;
use loadtest::error::LoadTestError;
use loadtest::logging::Logging;
use loadtest::runner::LoadTestRunner;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), LoadTestError> {
    let args = LoadTestArgs::parse();

    let mut logging = Logging::new();
    logging.init(args.verbose, args.log_file.as_deref())?;

    if let Err(error) = run(args).await {
        error!("Load test failed: {error}");
        return Err(error);
    }

    Ok(())
}

async fn run(args: LoadTestArgs) -> Result<(), LoadTestError> {
    let mut config = FileConfigProvider::resolve(args.config.clone())
        .load_config()
        .await?;
    args.apply_to(&mut config);
    config.validate()?;

    let embedded_target = ensure_target_ready(&config).await?;

    let shutdown = CancellationToken::new();
    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_shutdown.cancel();
        }
    });

    let client_factory = Arc::new(HttpClientFactory::from_config(&config)?);
    let report = LoadTestRunner::new(config, client_factory)
        .with_shutdown(shutdown)
        .run()
        .await?;

    if let Some(embedded_target) = embedded_target {
        embedded_target.shutdown().await;
    }

    report.print_summary();

    if let Some(output_dir) = &args.output_dir {
        let path = report
            .dump_to_json(output_dir)
            .map_err(LoadTestError::CannotWriteReport)?;
        info!("Report saved to: {}", path.display());
    }

    Ok(())
}
