use clap::Parser;
use dotenvy::dotenv;
use securedoc_client::cli::{self, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    // RUST_LOG wins; otherwise log at info, or warn with --quiet
    let default_filter = if cli.quiet {
        "securedoc_client=warn"
    } else {
        "securedoc_client=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run(cli).await
}
