use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kwscout::app::AppContext;
use kwscout::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kwscout=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port, open } => {
            commands::serve(&ctx, host, port, open).await?;
        }
        Commands::Fetch { url, json } => {
            commands::fetch(&ctx, &url, json).await?;
        }
    }

    Ok(())
}
