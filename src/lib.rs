// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod derive;
pub mod io;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    CategoryId, CategoryWithPizzas, FullOrder, Ingredient, IngredientId, Order, OrderId, Pizza,
    PizzaCategory, PizzaId, PizzaWithIngredients, SelectableIngredient, User, UserId,
    UserWithPizzas,
};

pub use crate::core::errors::{Error, Result};
pub use crate::core::table::{Entity, NormalizedTable};

pub use crate::derive::{derive_view, CatalogSnapshot, CatalogView, ViewEngine};

pub use crate::derive::filter::{categories_with_pizzas, selected_ingredient_ids};
pub use crate::derive::order_summary::{full_order, nb_pizzas_ordered};
pub use crate::derive::selectability::selectable_ingredients;

pub use crate::io::loader::{load_catalog, parse_catalog};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::search::normalize;
