#![allow(dead_code)]

use pizza_catalog::{
    CatalogSnapshot, Ingredient, IngredientId, NormalizedTable, Order, OrderId, Pizza,
    PizzaCategory, PizzaId, User, UserId,
};

pub fn ingredient(id: &str, name: &str, price: f64) -> Ingredient {
    Ingredient {
        id: IngredientId::from(id),
        name: name.to_string(),
        price,
        is_selected: false,
    }
}

pub fn pizza(id: &str, name: &str, price: f64, ingredient_ids: &[&str]) -> Pizza {
    Pizza {
        id: PizzaId::from(id),
        name: name.to_string(),
        price,
        ingredient_ids: ingredient_ids.iter().map(|i| IngredientId::from(*i)).collect(),
    }
}

pub fn category(id: &str, name: &str, pizza_ids: &[&str]) -> PizzaCategory {
    PizzaCategory {
        id: id.into(),
        name: name.to_string(),
        pizza_ids: pizza_ids.iter().map(|p| PizzaId::from(*p)).collect(),
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
    }
}

pub fn order(id: &str, user_id: &str, pizza_id: &str) -> Order {
    Order {
        id: OrderId::from(id),
        user_id: UserId::from(user_id),
        pizza_id: PizzaId::from(pizza_id),
    }
}

/// The worked catalog from the product examples: a Classic section with
/// Margherita and Pepperoni, a Specialty section with an accented name, and
/// one ingredient (pineapple) no pizza uses.
pub fn fixture() -> CatalogSnapshot {
    let ingredients = NormalizedTable::from_records(vec![
        ingredient("cheese", "Cheese", 1.0),
        ingredient("tomato", "Tomato", 0.5),
        ingredient("pepperoni", "Pepperoni", 1.5),
        ingredient("olive", "Olive", 0.8),
        ingredient("pineapple", "Pineapple", 1.2),
    ])
    .unwrap();

    let pizzas = NormalizedTable::from_records(vec![
        pizza("margherita", "Margherita", 8.0, &["cheese", "tomato"]),
        pizza(
            "pepperoni-pizza",
            "Pepperoni",
            9.5,
            &["cheese", "tomato", "pepperoni"],
        ),
        pizza("pizzaiolo", "Pizzaïolo", 10.0, &["cheese", "olive"]),
    ])
    .unwrap();

    let categories = NormalizedTable::from_records(vec![
        category("classic", "Classic", &["margherita", "pepperoni-pizza"]),
        category("specialty", "Specialty", &["pizzaiolo"]),
    ])
    .unwrap();

    let users = NormalizedTable::from_records(vec![user("alice", "Alice"), user("bob", "Bob")])
        .unwrap();

    let orders = NormalizedTable::from_records(vec![
        order("o1", "alice", "margherita"),
        order("o2", "bob", "pepperoni-pizza"),
        order("o3", "alice", "pizzaiolo"),
    ])
    .unwrap();

    CatalogSnapshot {
        ingredients,
        pizzas,
        categories,
        users,
        orders,
        search: String::new(),
    }
}

pub fn category_ids(view: &pizza_catalog::CatalogView) -> Vec<&str> {
    view.categories.iter().map(|c| c.id.as_str()).collect()
}

pub fn pizza_ids_of(view: &pizza_catalog::CatalogView, category_id: &str) -> Vec<String> {
    view.categories
        .iter()
        .find(|c| c.id.as_str() == category_id)
        .map(|c| c.pizzas.iter().map(|p| p.id.as_str().to_string()).collect())
        .unwrap_or_default()
}
