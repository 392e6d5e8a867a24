use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pizza-catalog")]
#[command(about = "Filter a pizza catalog and derive the menu view", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the filtered menu view from a catalog file
    Query {
        /// Path to the catalog JSON file
        path: PathBuf,

        /// Free-text pizza search (as extracted from the host, e.g. a URL
        /// query parameter); empty means no name filtering
        #[arg(short, long, default_value = "")]
        search: String,

        /// Ingredient ids to select; only pizzas carrying all of them match
        #[arg(short = 'i', long = "ingredient", value_delimiter = ',')]
        ingredients: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the consolidated group-order summary
    Summary {
        /// Path to the catalog JSON file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
