pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kwscout")]
#[command(about = "Scrape top-keyword tables with headless Chrome", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/kwscout/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the web form and the scrape API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the form in the system browser once listening
        #[arg(long)]
        open: bool,
    },
    /// Scrape one URL and print the keyword table
    Fetch {
        /// Page holding the keyword table
        url: String,

        /// Print the JSON response body instead of a table
        #[arg(long)]
        json: bool,
    },
}
