use taskmate::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    // Structured logging is only wired up when the user asks for it;
    // normal runs keep plain console output.
    if std::env::var("TASKMATE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskmate=debug")))
            .init();
    }

    Cli::menu().await
}
