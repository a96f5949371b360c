mod commands;
mod source;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{convert::ConvertArgs, index::IndexArgs};

#[derive(Parser)]
#[command(
    name = "avro-enum2int",
    about = "Replace an Avro enum column with its ordinals"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a container, map the enum column and write a new container
    Convert(ConvertArgs),
    /// Print the symbol to ordinal map of an enum column
    Index(IndexArgs),
}

fn main() -> Result<()> {
    // stdout carries container bytes; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => args.run(),
        Commands::Index(args) => args.run(),
    }
}
