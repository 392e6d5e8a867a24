//! The `query` command: load a catalog, apply search and ingredient
//! selection, derive the view, write it out.

use std::path::PathBuf;

use log::warn;

use crate::core::IngredientId;
use crate::derive;
use crate::io::loader;
use crate::io::output::{self, OutputFormat};

pub struct QueryConfig {
    pub path: PathBuf,
    pub search: String,
    pub ingredients: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn handle_query(config: QueryConfig) -> anyhow::Result<()> {
    let mut snapshot = loader::load_catalog(&config.path)?.with_search(config.search);

    for raw_id in &config.ingredients {
        let id = IngredientId::from(raw_id.as_str());
        if snapshot.ingredients.contains(&id) {
            snapshot = snapshot.select_ingredient(&id);
        } else {
            warn!("ignoring unknown ingredient id: {raw_id}");
        }
    }

    let view = derive::derive_view(&snapshot)?;

    let mut writer = output::create_writer(config.format, config.output)?;
    writer.write_view(&view)
}
