//! Catalog loading. The catalog is read once at startup from a JSON
//! document and validated for referential integrity here, so the derivation
//! layer can assume every id it follows resolves.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::core::errors::{Error, Result};
use crate::core::table::NormalizedTable;
use crate::core::{Ingredient, Order, Pizza, PizzaCategory, User};
use crate::derive::CatalogSnapshot;

/// On-disk catalog document. Users and orders are optional: a catalog file
/// that only describes the menu is valid.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub ingredients: Vec<Ingredient>,
    pub pizzas: Vec<Pizza>,
    pub categories: Vec<PizzaCategory>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Read and validate a catalog JSON file into a snapshot with an empty
/// search and no ingredient selected.
pub fn load_catalog(path: &Path) -> Result<CatalogSnapshot> {
    info!("loading catalog from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_catalog(&json)
}

/// Parse and validate a catalog JSON document.
pub fn parse_catalog(json: &str) -> Result<CatalogSnapshot> {
    let file: CatalogFile = serde_json::from_str(json)?;

    let snapshot = CatalogSnapshot {
        ingredients: NormalizedTable::from_records(file.ingredients)?,
        pizzas: NormalizedTable::from_records(file.pizzas)?,
        categories: NormalizedTable::from_records(file.categories)?,
        users: NormalizedTable::from_records(file.users)?,
        orders: NormalizedTable::from_records(file.orders)?,
        search: String::new(),
    };

    validate_references(&snapshot)?;

    debug!(
        "catalog loaded: {} ingredients, {} pizzas, {} categories, {} users, {} orders",
        snapshot.ingredients.len(),
        snapshot.pizzas.len(),
        snapshot.categories.len(),
        snapshot.users.len(),
        snapshot.orders.len(),
    );

    Ok(snapshot)
}

/// Reject dangling references before the core ever sees the data: every
/// pizza id named by a category, every ingredient id named by a pizza, and
/// every user/pizza id named by an order must resolve.
fn validate_references(snapshot: &CatalogSnapshot) -> Result<()> {
    for category in snapshot.categories.all() {
        for pizza_id in &category.pizza_ids {
            if !snapshot.pizzas.contains(pizza_id) {
                return Err(Error::MissingPizza {
                    category: category.id.clone(),
                    pizza: pizza_id.clone(),
                });
            }
        }
    }

    for pizza in snapshot.pizzas.all() {
        for ingredient_id in &pizza.ingredient_ids {
            if !snapshot.ingredients.contains(ingredient_id) {
                return Err(Error::MissingIngredient {
                    pizza: pizza.id.clone(),
                    ingredient: ingredient_id.clone(),
                });
            }
        }
    }

    for order in snapshot.orders.all() {
        if !snapshot.users.contains(&order.user_id) {
            return Err(Error::MissingUser {
                order: order.id.clone(),
                user: order.user_id.clone(),
            });
        }
        if !snapshot.pizzas.contains(&order.pizza_id) {
            return Err(Error::MissingOrderedPizza {
                order: order.id.clone(),
                pizza: order.pizza_id.clone(),
            });
        }
    }

    Ok(())
}
