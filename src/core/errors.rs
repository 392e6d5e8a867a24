//! Shared error types for catalog loading and derivation.

use thiserror::Error;

use crate::core::{CategoryId, IngredientId, OrderId, PizzaId, UserId};

/// Main error type for pizza-catalog operations.
///
/// Derivations are total over a well-formed catalog; every variant here is
/// either a catalog-shape violation caught at table construction or load
/// time, or an I/O problem from the loader.
#[derive(Debug, Error)]
pub enum Error {
    /// Two records in the same table carry the same identifier
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// The ordered id list and the id map of a table disagree
    #[error("{kind} table id list and entity map disagree on id: {id}")]
    TableMismatch { kind: &'static str, id: String },

    /// A category references a pizza absent from the pizza table
    #[error("category {category} references missing pizza {pizza}")]
    MissingPizza {
        category: CategoryId,
        pizza: PizzaId,
    },

    /// A pizza references an ingredient absent from the ingredient table
    #[error("pizza {pizza} references missing ingredient {ingredient}")]
    MissingIngredient {
        pizza: PizzaId,
        ingredient: IngredientId,
    },

    /// An order references a pizza absent from the pizza table
    #[error("order {order} references missing pizza {pizza}")]
    MissingOrderedPizza { order: OrderId, pizza: PizzaId },

    /// An order references a user absent from the user table
    #[error("order {order} references missing user {user}")]
    MissingUser { order: OrderId, user: UserId },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
