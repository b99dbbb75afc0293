//! Order lifecycle rules
//!
//! Pure validation: no I/O, no clock beyond the creation timestamp. The
//! transition table itself lives in `shared::order` so clients can render
//! the same protocol; this module enforces it.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use surrealdb::RecordId;

use shared::client::CreateOrderLine;
use shared::order::{OrderStatus, allowed_roles};
use shared::role::Role;

use super::error::OrderError;
use crate::db::models::{MenuItem, Order, OrderLine};

/// Check that `role` may move an order from `from` to `to`
///
/// Edge missing from the table → `IllegalTransition` regardless of role;
/// edge present but role not in its allow-set → `Forbidden`.
pub fn validate_transition(
    from: OrderStatus,
    to: OrderStatus,
    role: Role,
) -> Result<(), OrderError> {
    let roles = allowed_roles(from, to).ok_or(OrderError::IllegalTransition { from, to })?;
    if !roles.contains(&role) {
        return Err(OrderError::Forbidden { role, from, to });
    }
    Ok(())
}

/// Validate a create-order request and assemble the order
///
/// Each line snapshots the menu item's current name and price; the line
/// totals and order total are computed by summation, never taken from the
/// request. The new order starts `PENDING` with both timestamps stamped.
pub fn build_order(
    table_number: i32,
    lines: &[CreateOrderLine],
    customer_name: Option<String>,
    created_by: Option<RecordId>,
    menu: &HashMap<RecordId, MenuItem>,
) -> Result<Order, OrderError> {
    if table_number < 1 {
        return Err(OrderError::InvalidTableNumber(table_number));
    }
    if lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }

    let mut order_lines = Vec::with_capacity(lines.len());
    let mut total = Decimal::ZERO;

    for line in lines {
        let rid: RecordId = line
            .menu_item
            .parse()
            .map_err(|_| OrderError::UnknownMenuItem(line.menu_item.clone()))?;
        let item = menu
            .get(&rid)
            .ok_or_else(|| OrderError::UnknownMenuItem(line.menu_item.clone()))?;

        if line.quantity < 1 {
            return Err(OrderError::InvalidQuantity {
                item: item.name.clone(),
                quantity: line.quantity,
            });
        }
        if !item.is_available {
            return Err(OrderError::ItemUnavailable(item.name.clone()));
        }

        let line_total = item.price * Decimal::from(line.quantity);
        total += line_total;

        order_lines.push(OrderLine {
            menu_item: rid,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: line.quantity,
            line_total,
            note: line.note.clone(),
        });
    }

    let now = Utc::now();
    Ok(Order {
        id: None,
        table_number,
        lines: order_lines,
        status: OrderStatus::Pending,
        total,
        customer_name,
        created_at: now,
        updated_at: now,
        created_by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MenuCategory;
    use shared::order::{ALL_STATUSES, TRANSITIONS};
    use shared::role::ALL_ROLES;
    use std::str::FromStr;

    fn menu_item(id: &str, name: &str, price: &str, available: bool) -> (RecordId, MenuItem) {
        let rid: RecordId = id.parse().unwrap();
        (
            rid.clone(),
            MenuItem {
                id: Some(rid),
                name: name.to_string(),
                description: String::new(),
                price: Decimal::from_str(price).unwrap(),
                category: MenuCategory::Main,
                is_available: available,
                prep_minutes: 10,
                allergens: vec![],
                image: None,
            },
        )
    }

    fn test_menu() -> HashMap<RecordId, MenuItem> {
        [
            menu_item("menu_item:burger", "Burger", "10.00", true),
            menu_item("menu_item:fries", "Fries", "5.00", true),
            menu_item("menu_item:soup", "Soup of the Day", "4.50", false),
        ]
        .into_iter()
        .collect()
    }

    fn line(menu_item: &str, quantity: i32) -> CreateOrderLine {
        CreateOrderLine {
            menu_item: menu_item.to_string(),
            quantity,
            note: None,
        }
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let order = build_order(
            5,
            &[line("menu_item:burger", 2), line("menu_item:fries", 1)],
            None,
            None,
            &test_menu(),
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::from_str("25.00").unwrap());
        assert_eq!(order.lines[0].line_total, Decimal::from_str("20.00").unwrap());
        assert_eq!(order.lines[0].name, "Burger");
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn empty_order_is_rejected() {
        let err = build_order(1, &[], None, None, &test_menu()).unwrap_err();
        assert_eq!(err, OrderError::EmptyOrder);
    }

    #[test]
    fn table_number_must_be_positive() {
        for table in [0, -3] {
            let err = build_order(table, &[line("menu_item:burger", 1)], None, None, &test_menu())
                .unwrap_err();
            assert_eq!(err, OrderError::InvalidTableNumber(table));
        }
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = build_order(1, &[line("menu_item:burger", 0)], None, None, &test_menu())
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidQuantity {
                item: "Burger".to_string(),
                quantity: 0
            }
        );
    }

    #[test]
    fn unavailable_item_is_rejected() {
        let err = build_order(1, &[line("menu_item:soup", 1)], None, None, &test_menu())
            .unwrap_err();
        assert_eq!(err, OrderError::ItemUnavailable("Soup of the Day".to_string()));
    }

    #[test]
    fn unknown_item_is_rejected() {
        let err = build_order(1, &[line("menu_item:pizza", 1)], None, None, &test_menu())
            .unwrap_err();
        assert_eq!(err, OrderError::UnknownMenuItem("menu_item:pizza".to_string()));
    }

    /// Every (from, to, role) triple behaves exactly as the table says:
    /// listed edge + listed role succeeds, listed edge + other role is
    /// Forbidden, missing edge is IllegalTransition for everyone.
    #[test]
    fn transition_grid_is_exhaustive() {
        for from in ALL_STATUSES {
            for to in ALL_STATUSES {
                let edge = TRANSITIONS
                    .iter()
                    .find(|(f, t, _)| f == from && t == to)
                    .map(|(_, _, roles)| *roles);
                for role in ALL_ROLES {
                    let result = validate_transition(*from, *to, *role);
                    match edge {
                        Some(roles) if roles.contains(role) => {
                            assert!(result.is_ok(), "{from} -> {to} by {role}")
                        }
                        Some(_) => assert_eq!(
                            result,
                            Err(OrderError::Forbidden {
                                role: *role,
                                from: *from,
                                to: *to
                            })
                        ),
                        None => assert_eq!(
                            result,
                            Err(OrderError::IllegalTransition {
                                from: *from,
                                to: *to
                            })
                        ),
                    }
                }
            }
        }
    }

    #[test]
    fn terminal_states_reject_every_request() {
        for from in [OrderStatus::Served, OrderStatus::Cancelled] {
            for to in ALL_STATUSES {
                for role in ALL_ROLES {
                    assert!(validate_transition(from, *to, *role).is_err());
                }
            }
        }
    }
}
