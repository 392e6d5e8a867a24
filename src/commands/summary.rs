//! The `summary` command: load a catalog and print the consolidated
//! group-order summary.

use std::path::PathBuf;

use crate::derive::order_summary;
use crate::io::loader;
use crate::io::output::{self, OutputFormat};

pub struct SummaryConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_summary(config: SummaryConfig) -> anyhow::Result<()> {
    let snapshot = loader::load_catalog(&config.path)?;

    let order = order_summary::full_order(&snapshot.users, &snapshot.orders, &snapshot.pizzas)?;

    let mut writer = output::create_writer(config.format, config.output)?;
    writer.write_order(&order)
}
