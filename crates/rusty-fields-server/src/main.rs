use anyhow::{Context, Result};
use rusty_fields_server::{app, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_default().context("Failed to load config")?;
    info!(
        note_max_length = config.contact.note_max_length,
        show_note_char_count = config.contact.show_note_char_count,
        "rusty-fields starting"
    );

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(&config))
        .await
        .context("Server error")?;

    Ok(())
}
