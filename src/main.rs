use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newswire::app::AppContext;
use newswire::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.endpoint);

    match cli.command {
        Commands::List { images } => {
            commands::list_articles(&ctx, images).await?;
        }
        Commands::Search { term } => {
            commands::search_articles(&ctx, &term).await?;
        }
        Commands::Open { index } => {
            commands::open_article(&ctx, index).await?;
        }
    }

    Ok(())
}
