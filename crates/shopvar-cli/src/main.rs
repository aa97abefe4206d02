mod classify;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::classify::ClassifyOptions;
use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "shopvar")]
#[command(about = "Detect Shopify products that only have the default variant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify JSON documents (files, or stdin when none are given)
    Classify {
        /// Input files; `-` reads stdin
        paths: Vec<PathBuf>,
        /// JSON pointer selecting the value to classify, e.g. `/data/product`
        #[arg(long)]
        pointer: Option<String>,
        /// Classify each element of the selected array or `products` list
        #[arg(long)]
        each: bool,
        /// Decode into the typed products.json model before classifying
        #[arg(long)]
        typed: bool,
        /// Output format; defaults to `SHOPVAR_OUTPUT_FORMAT`
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> anyhow::Result<()> {
    let config = config::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Commands::Classify {
            paths,
            pointer,
            each,
            typed,
            format,
        } => {
            let options = ClassifyOptions {
                pointer,
                each,
                typed,
                format: format.unwrap_or(config.output_format),
            };
            classify::run(&paths, &options, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
