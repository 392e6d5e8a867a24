//! Ingredient selectability: an ingredient stays selectable while at least
//! one pizza matching the current search carries it. The current ingredient
//! selection is deliberately ignored here, otherwise picking an ingredient
//! could knock itself (and its neighbors) out of the filter list as the
//! selection narrows.

use std::collections::HashSet;

use crate::core::errors::Result;
use crate::core::table::NormalizedTable;
use crate::core::{Ingredient, IngredientId, Pizza, PizzaCategory, SelectableIngredient};
use crate::derive::filter;

/// Every catalog ingredient in catalog order, augmented with
/// `is_selectable`: true iff some pizza passing the search-only filter
/// lists it.
pub fn selectable_ingredients(
    normalized_search: &str,
    pizzas: &NormalizedTable<Pizza>,
    categories: &NormalizedTable<PizzaCategory>,
    ingredients: &NormalizedTable<Ingredient>,
) -> Result<Vec<SelectableIngredient>> {
    let search_only =
        filter::categories_with_pizzas_search_only(normalized_search, pizzas, categories, ingredients)?;

    let mut reachable: HashSet<&IngredientId> = HashSet::new();
    for category in &search_only {
        for pizza in &category.pizzas {
            reachable.extend(pizza.ingredient_ids.iter());
        }
    }

    Ok(ingredients
        .all()
        .map(|ingredient| SelectableIngredient {
            is_selectable: reachable.contains(&ingredient.id),
            ingredient: ingredient.clone(),
        })
        .collect())
}
