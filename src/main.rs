//! Minuta server binary — local meeting summarization API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use minuta::api::{start_server, ApiContext};
use minuta::config;
use minuta::pipeline::summarize::ollama::OllamaSummarizer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let addr: SocketAddr = std::env::var("MINUTA_ADDR")
        .unwrap_or_else(|_| config::DEFAULT_BIND_ADDR.to_string())
        .parse()
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid MINUTA_ADDR, falling back to default");
            config::DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address is valid")
        });

    // Resolve the summarization model up front so misconfiguration shows
    // at startup, not on the first request. The blocking HTTP client must
    // be built off the runtime threads.
    let summarizer = tokio::task::spawn_blocking(|| match OllamaSummarizer::default_local() {
        Ok(s) => {
            tracing::info!(model = %s.model(), "summarization backend ready");
            s
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ollama not ready; requests will fail until it is");
            OllamaSummarizer::new(
                config::OLLAMA_BASE_URL,
                "llama3.2",
                config::OLLAMA_TIMEOUT_SECS,
            )
        }
    })
    .await
    .expect("summarizer setup task panicked");

    let ctx = ApiContext::new(Arc::new(summarizer));
    let server = match start_server(ctx, addr).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "failed to start meeting API server");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.addr, "ready — POST /api/meetings/summarize");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    drop(server);
}
