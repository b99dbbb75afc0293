//! Order status protocol
//!
//! An order walks a strict single path `PENDING → PREPARING → READY →
//! SERVED` with one early-abort branch `PENDING → CANCELLED`. `SERVED` and
//! `CANCELLED` are terminal. The transition table also fixes which roles
//! may drive each edge; any (from, to) pair not listed is illegal for every
//! role, including same-state no-ops and skips.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

/// All statuses
pub const ALL_STATUSES: &[OrderStatus] = &[
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::Ready,
    OrderStatus::Served,
    OrderStatus::Cancelled,
];

impl OrderStatus {
    /// Whether no further transition exists out of this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Served | OrderStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The exhaustive transition table: (from, to, roles allowed to drive it)
///
/// Every caller must additionally hold `UPDATE_ORDER_STATUS`; that gate is
/// enforced by the request middleware, this table only narrows WHICH edge a
/// role may drive.
pub const TRANSITIONS: &[(OrderStatus, OrderStatus, &[Role])] = &[
    (
        OrderStatus::Pending,
        OrderStatus::Preparing,
        &[Role::Chef, Role::Manager, Role::Owner],
    ),
    (
        OrderStatus::Pending,
        OrderStatus::Cancelled,
        &[Role::Waiter, Role::Manager, Role::Owner],
    ),
    (
        OrderStatus::Preparing,
        OrderStatus::Ready,
        &[Role::Chef, Role::Manager, Role::Owner],
    ),
    (
        OrderStatus::Ready,
        OrderStatus::Served,
        &[Role::Waiter, Role::Manager, Role::Owner],
    ),
];

/// Roles allowed to drive the (from, to) edge, `None` if the edge does not
/// exist
pub fn allowed_roles(from: OrderStatus, to: OrderStatus) -> Option<&'static [Role]> {
    TRANSITIONS
        .iter()
        .find(|(f, t, _)| *f == from && *t == to)
        .map(|(_, _, roles)| *roles)
}

/// Whether the (from, to) edge exists for any role
pub fn is_legal_transition(from: OrderStatus, to: OrderStatus) -> bool {
    allowed_roles(from, to).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_edges_exist() {
        let mut edges = 0;
        for from in ALL_STATUSES {
            for to in ALL_STATUSES {
                if is_legal_transition(*from, *to) {
                    edges += 1;
                }
            }
        }
        assert_eq!(edges, 4);
    }

    #[test]
    fn terminal_states_have_no_outgoing_edges() {
        for from in [OrderStatus::Served, OrderStatus::Cancelled] {
            for to in ALL_STATUSES {
                assert!(!is_legal_transition(from, *to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn no_same_state_transitions() {
        for status in ALL_STATUSES {
            assert!(!is_legal_transition(*status, *status));
        }
    }

    #[test]
    fn cancel_only_from_pending() {
        assert!(is_legal_transition(OrderStatus::Pending, OrderStatus::Cancelled));
        for from in [OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Served] {
            assert!(!is_legal_transition(from, OrderStatus::Cancelled));
        }
    }

    #[test]
    fn kitchen_edges_exclude_waiter_and_floor_edges_exclude_chef() {
        let prep = allowed_roles(OrderStatus::Pending, OrderStatus::Preparing).unwrap();
        assert!(!prep.contains(&Role::Waiter));

        let cancel = allowed_roles(OrderStatus::Pending, OrderStatus::Cancelled).unwrap();
        assert!(!cancel.contains(&Role::Chef));

        let serve = allowed_roles(OrderStatus::Ready, OrderStatus::Served).unwrap();
        assert!(!serve.contains(&Role::Chef));
    }

    #[test]
    fn manager_and_owner_sit_on_every_edge() {
        for (_, _, roles) in TRANSITIONS {
            assert!(roles.contains(&Role::Manager));
            assert!(roles.contains(&Role::Owner));
        }
    }
}
