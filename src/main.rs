use clap::Parser;
use std::sync::Arc;
use task_intake::utils::{logger, validation::Validate};
use task_intake::{router, CliConfig, NotionConfig, NotionSink, TaskHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting task-intake server");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let notion_config = NotionConfig::from_env();
    tracing::debug!("Notion config: {:?}", notion_config);

    if let Err(e) = config.validate().and_then(|_| notion_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = config.socket_addr()?;
    let sink = NotionSink::new(&notion_config);
    let handler = Arc::new(TaskHandler::new(sink, notion_config));
    let app = router(&config.route, handler);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("📮 Accepting tasks at http://{}{}", addr, config.route);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
