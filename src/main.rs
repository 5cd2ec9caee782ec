use gamehelper::{
    http, AppState, Connection, RpcHandler, ServerConfig, StdioTransport, ToolRegistry,
    TransportKind,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // stdout carries protocol frames, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamehelper=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env();
    info!(transport = %config.transport, "Starting game helper tool server");

    let registry = match ToolRegistry::standard() {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            error!(error = %e, "Failed to build tool registry");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };

    match config.transport {
        TransportKind::Stdio => {
            let handler = Arc::new(RpcHandler::new(registry));
            let connection = Connection::new(Box::new(StdioTransport::stdio()), handler);
            info!("MCP Game Helper running on stdio");

            if let Err(e) = connection.run().await {
                error!(error = %e, "Connection failed");
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, e));
            }
        }
        TransportKind::Http => {
            let app = http::router(AppState::new(registry));
            let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
            info!("Server running on http://{}", config.http_addr);
            axum::serve(listener, app).await?;
        }
    }

    info!("Game helper stopped");
    Ok(())
}
