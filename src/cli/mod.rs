pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newswire")]
#[command(about = "A thin news-article client", long_about = None)]
pub struct Cli {
    /// Override the article endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and print the article list
    List {
        /// Also fetch each article's thumbnail
        #[arg(long)]
        images: bool,
    },
    /// Fetch, then filter articles by title substring (case-sensitive)
    Search {
        /// Literal substring to match against titles
        term: String,
    },
    /// Open an article's URL in the system browser
    Open {
        /// Index into the article list as printed by `list`
        index: usize,
    },
}
