pub mod errors;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::core::table::Entity;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(IngredientId);
entity_id!(PizzaId);
entity_id!(CategoryId);
entity_id!(UserId);
entity_id!(OrderId);

/// A topping from the catalog. `is_selected` is the user-toggled filter flag;
/// selectability is derived separately and lives on [`SelectableIngredient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub is_selected: bool,
}

impl Entity for Ingredient {
    type Id = IngredientId;
    const KIND: &'static str = "ingredient";

    fn id(&self) -> &IngredientId {
        &self.id
    }
}

/// A pizza from the catalog. Ingredients are held as references into the
/// ingredient table, in recipe order; they are never owned here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub price: f64,
    pub ingredient_ids: Vec<IngredientId>,
}

impl Entity for Pizza {
    type Id = PizzaId;
    const KIND: &'static str = "pizza";

    fn id(&self) -> &PizzaId {
        &self.id
    }
}

/// A menu section. Member pizzas are references into the pizza table, in
/// menu order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaCategory {
    pub id: CategoryId,
    pub name: String,
    pub pizza_ids: Vec<PizzaId>,
}

impl Entity for PizzaCategory {
    type Id = CategoryId;
    const KIND: &'static str = "category";

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// A participant in the group order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl Entity for User {
    type Id = UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// One ordered pizza: a single pick of `pizza_id` by `user_id`. A user
/// ordering two pizzas produces two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub pizza_id: PizzaId,
}

impl Entity for Order {
    type Id = OrderId;
    const KIND: &'static str = "order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// A pizza with its ingredient references resolved to full records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaWithIngredients {
    pub id: PizzaId,
    pub name: String,
    pub price: f64,
    pub ingredient_ids: Vec<IngredientId>,
    pub ingredients: Vec<Ingredient>,
}

/// A category that survived filtering, with its matching pizzas resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWithPizzas {
    pub id: CategoryId,
    pub name: String,
    pub pizzas: Vec<PizzaWithIngredients>,
}

/// An ingredient augmented with the derived `is_selectable` flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectableIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub is_selectable: bool,
}

/// One user's share of the group order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserWithPizzas {
    pub id: UserId,
    pub name: String,
    pub pizzas: Vec<Pizza>,
    pub total_price: f64,
}

/// The consolidated group order: every user with their pizzas, plus the
/// grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullOrder {
    pub users: Vec<UserWithPizzas>,
    pub total_price: f64,
}
