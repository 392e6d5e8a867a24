//! Property tests for the derivation pipeline: normalization equivalence,
//! vacuous filters, toggle round-trips, order stability.

mod common;

use proptest::prelude::*;

use common::fixture;
use pizza_catalog::{derive_view, normalize, IngredientId};

/// Queries drawn from the characters pizza names actually use, accents
/// included.
fn query() -> impl Strategy<Value = String> {
    "[a-zA-ZéÉàÀïÏöÖœŒ ]{0,10}"
}

fn ingredient_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(
        vec!["cheese", "tomato", "pepperoni", "olive", "pineapple"],
        0..=5,
    )
}

/// True when `sub` appears within `full` in the same relative order.
fn is_subsequence(sub: &[String], full: &[&str]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in "\\PC{0,24}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn equivalent_queries_derive_identical_views(raw in query()) {
        let from_raw = derive_view(&fixture().with_search(&raw)).unwrap();
        let from_normalized = derive_view(&fixture().with_search(normalize(&raw))).unwrap();

        prop_assert_eq!(from_raw, from_normalized);
    }

    #[test]
    fn empty_search_never_drops_a_category(selected in ingredient_subset()) {
        let mut snapshot = fixture();
        let unfiltered = derive_view(&snapshot).unwrap();
        prop_assert_eq!(unfiltered.categories.len(), snapshot.categories.len());

        // with a selection active, surviving categories are still a
        // sub-order of the catalog
        for id in &selected {
            snapshot = snapshot.select_ingredient(&IngredientId::from(*id));
        }
        let view = derive_view(&snapshot).unwrap();
        let ids: Vec<String> = view
            .categories
            .iter()
            .map(|c| c.id.as_str().to_string())
            .collect();
        prop_assert!(is_subsequence(&ids, &["classic", "specialty"]));
    }

    #[test]
    fn select_then_unselect_round_trips(raw in query(), toggles in ingredient_subset()) {
        let base = fixture().with_search(&raw);
        let before = derive_view(&base).unwrap();

        let mut toggled = base.clone();
        for id in &toggles {
            toggled = toggled.select_ingredient(&IngredientId::from(*id));
        }
        for id in &toggles {
            toggled = toggled.unselect_ingredient(&IngredientId::from(*id));
        }

        prop_assert_eq!(derive_view(&toggled).unwrap(), before);
    }

    #[test]
    fn selectability_ignores_selection(raw in query(), selected in ingredient_subset()) {
        let base = fixture().with_search(&raw);
        let mut narrowed = base.clone();
        for id in &selected {
            narrowed = narrowed.select_ingredient(&IngredientId::from(*id));
        }

        let base_flags: Vec<bool> = derive_view(&base)
            .unwrap()
            .ingredients
            .iter()
            .map(|i| i.is_selectable)
            .collect();
        let narrowed_flags: Vec<bool> = derive_view(&narrowed)
            .unwrap()
            .ingredients
            .iter()
            .map(|i| i.is_selectable)
            .collect();

        prop_assert_eq!(base_flags, narrowed_flags);
    }

    #[test]
    fn pizza_order_is_a_stable_sub_order(raw in query()) {
        let view = derive_view(&fixture().with_search(&raw)).unwrap();

        let catalog_pizzas = ["margherita", "pepperoni-pizza", "pizzaiolo"];
        let mut seen = Vec::new();
        for category in &view.categories {
            for pizza in &category.pizzas {
                seen.push(pizza.id.as_str().to_string());
            }
        }

        prop_assert!(is_subsequence(&seen, &catalog_pizzas));
    }

    #[test]
    fn derivation_is_deterministic(raw in query(), selected in ingredient_subset()) {
        let mut snapshot = fixture().with_search(&raw);
        for id in &selected {
            snapshot = snapshot.select_ingredient(&IngredientId::from(*id));
        }

        prop_assert_eq!(
            derive_view(&snapshot).unwrap(),
            derive_view(&snapshot.clone()).unwrap()
        );
    }
}
