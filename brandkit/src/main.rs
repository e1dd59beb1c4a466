use std::path::PathBuf;

use anyhow::Result;
use brandkit::{
    Config,
    commands::{analytics_report, generate},
    telemetry::{get_subscriber, init_subscriber, log_error},
};
use clap::{Parser, Subcommand};
use payloads::StaticCatalog;

/// Developer tool for the hotel site's brand kit generator and dashboard.
///
/// Environment variables can be set directly or loaded from a .env file in
/// the working directory.
///
/// Used by `generate`:
/// - GEMINI_API_KEY: key for the generative model (required)
/// - GEMINI_MODEL: model name (optional, defaults to gemini-2.5-flash)
/// - GEMINI_BASE_URL: API root (optional, defaults to the public endpoint)
/// - GEMINI_TIMEOUT_SECS: request timeout in seconds (optional, 60)
///
/// Example:
/// GEMINI_API_KEY=your_key cargo run -p brandkit -- generate logo.png
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a palette, brand name and hero title from a logo image
    Generate {
        #[arg(value_name = "LOGO")]
        logo: PathBuf,
    },
    /// Print the dashboard analytics for the demo catalog
    Analytics,
}

#[tokio::main]
async fn main() -> Result<()> {
    // silently ignored if there is no .env file
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { logo } => {
            let client = Config::from_env()?.client()?;
            match generate(&client, &logo).await {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    log_error(e);
                    std::process::exit(1);
                }
            }
        }
        Command::Analytics => {
            print!("{}", analytics_report(&StaticCatalog::demo()));
        }
    }
    Ok(())
}
