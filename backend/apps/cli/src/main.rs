//! Users CLI Entry Point
//!
//! Reads one JSON command per stdin line and writes one response envelope
//! per stdout line. Logs go to stderr.
//! Uses `anyhow` for startup errors, but command-level
//! errors are reported through the response envelope.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use users::{InMemoryUserRepository, UserHandlers, UsersConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stdout carries responses only)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_cli=info,users=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = UsersConfig::from_env()?;
    tracing::info!(
        default_page_limit = config.default_page_limit,
        max_page_limit = config.max_page_limit,
        max_entries = ?config.max_entries,
        "Configuration loaded"
    );

    let repo = Arc::new(InMemoryUserRepository::from_config(&config));
    let handlers = UserHandlers::new(repo, Arc::new(config));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut handled: u64 = 0;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = handlers.handle_line(&line).await;
        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
        handled += 1;
    }

    tracing::info!(commands = handled, "Shutting down");
    Ok(())
}
