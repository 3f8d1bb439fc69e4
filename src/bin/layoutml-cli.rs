use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use layoutml::config::load_config;

#[derive(Parser)]
#[command(name = "layoutml-cli")]
#[command(about = "Management CLI for a LayoutML site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a path from a running site and print the response
    Fetch {
        /// Request path, e.g. /contact
        path: String,

        #[arg(short, long, default_value = "http://127.0.0.1:5005")]
        url: String,

        /// Print only status and headers
        #[arg(long)]
        head: bool,
    },
    /// Load and validate a config file, then print it as JSON
    CheckConfig {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { path, url, head } => {
            let target = format!("{}/{}", url.trim_end_matches('/'), path.trim_start_matches('/'));
            let res = reqwest::Client::new().get(&target).send().await?;
            print_response(res, head).await?;
        }
        Commands::CheckConfig { file } => match load_config(&file) {
            Ok(config) => println!("{}", serde_json::to_string_pretty(&config)?),
            Err(e) => {
                let report = json!({ "file": file.display().to_string(), "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&report)?);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

async fn print_response(res: reqwest::Response, head_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", res.status());
    for name in ["content-type", "x-request-id"] {
        if let Some(value) = res.headers().get(name) {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
    }
    if head_only {
        return Ok(());
    }
    println!();
    println!("{}", res.text().await?);
    Ok(())
}
