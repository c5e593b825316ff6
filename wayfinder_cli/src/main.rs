use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

mod map_file;
mod route;
mod search;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the shortest route and its alternative between two cities
    Route {
        /// Path to a map JSON file (cities, connections, map metadata)
        #[arg(short, long)]
        map: PathBuf,

        /// Name of the start city
        #[arg(short, long)]
        from: String,

        /// Name of the destination city
        #[arg(short, long)]
        to: String,
    },
    /// List cities matching a partial name
    Search {
        #[arg(short, long)]
        map: PathBuf,

        #[arg(short, long)]
        query: String,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.command {
        Commands::Route { map, from, to } => route::run(&map, &from, &to),
        Commands::Search { map, query, limit } => search::run(&map, &query, limit),
    }
}
