//! Output writers for the derived view and the consolidated order summary.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::core::FullOrder;
use crate::derive::CatalogView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_view(&mut self, view: &CatalogView) -> anyhow::Result<()>;
    fn write_order(&mut self, order: &FullOrder) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_view(&mut self, view: &CatalogView) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(view)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn write_order(&mut self, order: &FullOrder) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(order)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_view(&mut self, view: &CatalogView) -> anyhow::Result<()> {
        for category in &view.categories {
            writeln!(self.writer, "{}", category.name)?;
            for pizza in &category.pizzas {
                let toppings: Vec<&str> = pizza
                    .ingredients
                    .iter()
                    .map(|i| i.name.as_str())
                    .collect();
                writeln!(
                    self.writer,
                    "  {} ({:.2}) [{}]",
                    pizza.name,
                    pizza.price,
                    toppings.join(", ")
                )?;
            }
        }

        if view.nb_ingredients_selected > 0 {
            writeln!(
                self.writer,
                "{} ingredient(s) selected",
                view.nb_ingredients_selected
            )?;
        }
        writeln!(self.writer, "{} pizza(s) ordered", view.nb_pizzas_ordered)?;
        Ok(())
    }

    fn write_order(&mut self, order: &FullOrder) -> anyhow::Result<()> {
        for user in &order.users {
            writeln!(self.writer, "{} ({:.2})", user.name, user.total_price)?;
            for pizza in &user.pizzas {
                writeln!(self.writer, "  {} ({:.2})", pizza.name, pizza.price)?;
            }
        }
        writeln!(self.writer, "total: {:.2}", order.total_price)?;
        Ok(())
    }
}

/// Build a writer for the requested format, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
