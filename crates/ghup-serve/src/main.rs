use anyhow::Context;
use clap::Parser;
use ghup_core::upload::{ClientSettings, ContentsClient};
use ghup_core::Config;
use ghup_serve::{router, AppState, DEFAULT_MAX_UPLOAD_MB};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ghup-serve")]
#[command(about = "Form-submit fallback server for GitHub file uploads")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "GHUP_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// GitHub API base URL [default: api_url from the ghup config file]
    #[arg(long, env = "GHUP_API_URL")]
    api_url: Option<String>,

    /// Maximum request body size in megabytes
    #[arg(long, env = "GHUP_MAX_UPLOAD_MB", default_value_t = DEFAULT_MAX_UPLOAD_MB)]
    max_upload_mb: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default settings, config could not be loaded: {}", e);
        Config::default()
    });

    let mut settings = ClientSettings::from_config(&config);
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    let client = ContentsClient::new(&settings).context("Failed to build GitHub client")?;

    let app = router(
        AppState::new(Arc::new(client)),
        args.max_upload_mb * 1024 * 1024,
    );

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    info!("ghup-serve listening on http://{}", args.bind);
    info!("Uploading through {}", settings.api_url);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
