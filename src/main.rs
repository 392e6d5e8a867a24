use anyhow::Result;
use clap::Parser;
use pizza_catalog::cli::{Cli, Commands};
use pizza_catalog::commands::query::{handle_query, QueryConfig};
use pizza_catalog::commands::summary::{handle_summary, SummaryConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            path,
            search,
            ingredients,
            format,
            output,
        } => handle_query(QueryConfig {
            path,
            search,
            ingredients,
            format,
            output,
        }),
        Commands::Summary {
            path,
            format,
            output,
        } => handle_summary(SummaryConfig {
            path,
            format,
            output,
        }),
    }
}
