//! The consolidated group order: each user's pizzas and subtotal, plus the
//! grand total. Feeds the order-summary display and any export the host
//! wants to render from it.

use std::collections::HashMap;

use crate::core::errors::{Error, Result};
use crate::core::table::NormalizedTable;
use crate::core::{FullOrder, Order, Pizza, User, UserId, UserWithPizzas};

/// Number of pizzas ordered so far across all users.
pub fn nb_pizzas_ordered(orders: &NormalizedTable<Order>) -> usize {
    orders.len()
}

/// Aggregate the order table into the consolidated summary.
///
/// Users appear in user-table order, each with their pizzas in order-table
/// order (the sequence the picks were made in) and a subtotal; users who
/// ordered nothing are kept with an empty list. Dangling user or pizza
/// references are surfaced as errors naming the offending order.
pub fn full_order(
    users: &NormalizedTable<User>,
    orders: &NormalizedTable<Order>,
    pizzas: &NormalizedTable<Pizza>,
) -> Result<FullOrder> {
    let mut by_user: HashMap<&UserId, Vec<Pizza>> = HashMap::new();

    for order in orders.all() {
        if !users.contains(&order.user_id) {
            return Err(Error::MissingUser {
                order: order.id.clone(),
                user: order.user_id.clone(),
            });
        }
        let pizza = pizzas
            .get(&order.pizza_id)
            .ok_or_else(|| Error::MissingOrderedPizza {
                order: order.id.clone(),
                pizza: order.pizza_id.clone(),
            })?;

        by_user.entry(&order.user_id).or_default().push(pizza.clone());
    }

    let users_with_pizzas: Vec<UserWithPizzas> = users
        .all()
        .map(|user| {
            let pizzas = by_user.remove(&user.id).unwrap_or_default();
            let total_price = pizzas.iter().map(|p| p.price).sum();

            UserWithPizzas {
                id: user.id.clone(),
                name: user.name.clone(),
                pizzas,
                total_price,
            }
        })
        .collect();

    let total_price = users_with_pizzas.iter().map(|u| u.total_price).sum();

    Ok(FullOrder {
        users: users_with_pizzas,
        total_price,
    })
}
