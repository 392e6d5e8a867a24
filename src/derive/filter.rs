//! The category/pizza filter: resolve each category's pizzas, keep the ones
//! whose name matches the search and whose ingredients cover the current
//! selection, and drop categories left empty.

use crate::core::errors::{Error, Result};
use crate::core::table::NormalizedTable;
use crate::core::{
    CategoryWithPizzas, Ingredient, IngredientId, Pizza, PizzaCategory, PizzaWithIngredients,
};
use crate::search;

/// Ids of the ingredients the user has selected, in catalog order.
pub fn selected_ingredient_ids<'a>(
    ingredients: impl IntoIterator<Item = &'a Ingredient>,
) -> Vec<IngredientId> {
    ingredients
        .into_iter()
        .filter(|ingredient| ingredient.is_selected)
        .map(|ingredient| ingredient.id.clone())
        .collect()
}

/// True when the pizza carries every selected ingredient. Vacuously true for
/// an empty selection, which is what makes "nothing selected" mean
/// "show all".
fn contains_all_selected(selected: &[IngredientId], pizza: &Pizza) -> bool {
    selected.iter().all(|id| pizza.ingredient_ids.contains(id))
}

fn resolve_pizza(
    pizza: &Pizza,
    ingredients: &NormalizedTable<Ingredient>,
) -> Result<PizzaWithIngredients> {
    let resolved = pizza
        .ingredient_ids
        .iter()
        .map(|id| {
            ingredients
                .get(id)
                .cloned()
                .ok_or_else(|| Error::MissingIngredient {
                    pizza: pizza.id.clone(),
                    ingredient: id.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PizzaWithIngredients {
        id: pizza.id.clone(),
        name: pizza.name.clone(),
        price: pizza.price,
        ingredient_ids: pizza.ingredient_ids.clone(),
        ingredients: resolved,
    })
}

/// Derive the filtered menu view.
///
/// For each category in catalog order, resolve its member pizzas in menu
/// order (attaching full ingredient records), keep the pizzas whose
/// normalized name contains `normalized_search` and whose ingredient set is
/// a superset of `selected`, and emit the category only if at least one
/// pizza survives. `normalized_search` must already be passed through
/// [`search::normalize`].
///
/// A dangling pizza or ingredient reference is a catalog-integrity violation
/// and is surfaced as an error naming the missing id and its referent.
pub fn categories_with_pizzas(
    normalized_search: &str,
    pizzas: &NormalizedTable<Pizza>,
    categories: &NormalizedTable<PizzaCategory>,
    selected: &[IngredientId],
    ingredients: &NormalizedTable<Ingredient>,
) -> Result<Vec<CategoryWithPizzas>> {
    let mut view = Vec::new();

    for category in categories.all() {
        let mut matching = Vec::new();

        for pizza_id in &category.pizza_ids {
            let pizza = pizzas.get(pizza_id).ok_or_else(|| Error::MissingPizza {
                category: category.id.clone(),
                pizza: pizza_id.clone(),
            })?;

            if search::name_matches(&pizza.name, normalized_search)
                && contains_all_selected(selected, pizza)
            {
                matching.push(resolve_pizza(pizza, ingredients)?);
            }
        }

        if !matching.is_empty() {
            view.push(CategoryWithPizzas {
                id: category.id.clone(),
                name: category.name.clone(),
                pizzas: matching,
            });
        }
    }

    Ok(view)
}

/// The filter with the ingredient-superset condition forced true: only the
/// search narrows the result. Selectability is derived from this pass so
/// that selecting an ingredient can never hide itself.
pub fn categories_with_pizzas_search_only(
    normalized_search: &str,
    pizzas: &NormalizedTable<Pizza>,
    categories: &NormalizedTable<PizzaCategory>,
    ingredients: &NormalizedTable<Ingredient>,
) -> Result<Vec<CategoryWithPizzas>> {
    categories_with_pizzas(normalized_search, pizzas, categories, &[], ingredients)
}
