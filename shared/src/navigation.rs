//! Navigation entries for the role-gated dashboards
//!
//! The master list is fixed and ordered. An entry is visible to a role only
//! when BOTH gates pass: the role is in the entry's allow-list AND the role
//! holds the entry's required capability. The allow-list deliberately
//! narrows some entries below what the capability alone would permit (the
//! kitchen board is hidden from waiters even though they hold
//! `UPDATE_ORDER_STATUS`), so the double gate must not be collapsed into a
//! plain capability check.

use serde::Serialize;

use crate::permissions::has_capability;
use crate::role::{Capability, Role};

/// One sidebar entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavItem {
    /// Stable key used by the frontend router
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    /// Capability gate
    #[serde(skip)]
    pub required: Capability,
    /// Role allow-list gate
    #[serde(skip)]
    pub roles: &'static [Role],
}

/// Master navigation list, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        key: "orders",
        label: "Orders",
        path: "/orders",
        required: Capability::ViewOrders,
        roles: &[Role::Owner, Role::Manager, Role::Waiter],
    },
    NavItem {
        key: "kitchen",
        label: "Kitchen",
        path: "/kitchen",
        required: Capability::UpdateOrderStatus,
        roles: &[Role::Owner, Role::Manager, Role::Chef],
    },
    NavItem {
        key: "menu",
        label: "Menu",
        path: "/menu",
        required: Capability::ManageMenu,
        roles: &[Role::Owner, Role::Manager],
    },
    NavItem {
        key: "staff",
        label: "Staff",
        path: "/staff",
        required: Capability::ManageStaff,
        roles: &[Role::Owner, Role::Manager],
    },
    NavItem {
        key: "reports",
        label: "Reports",
        path: "/reports",
        required: Capability::ViewReports,
        roles: &[Role::Owner, Role::Manager],
    },
];

/// Navigation entries visible to a role, preserving master-list order
pub fn navigation_for(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.roles.contains(&role) && has_capability(role, item.required))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ALL_ROLES;

    #[test]
    fn entries_respect_both_gates() {
        for role in ALL_ROLES {
            for item in navigation_for(*role) {
                assert!(item.roles.contains(role));
                assert!(has_capability(*role, item.required));
            }
        }
    }

    /// Regression: holding the capability is not enough, the allow-list
    /// must also contain the role.
    #[test]
    fn waiter_does_not_see_kitchen_board() {
        assert!(has_capability(Role::Waiter, Capability::UpdateOrderStatus));
        let keys: Vec<_> = navigation_for(Role::Waiter).iter().map(|i| i.key).collect();
        assert!(!keys.contains(&"kitchen"));
    }

    #[test]
    fn chef_sees_kitchen_board_only() {
        let keys: Vec<_> = navigation_for(Role::Chef).iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["kitchen"]);
    }

    #[test]
    fn owner_sees_master_list_in_order() {
        let keys: Vec<_> = navigation_for(Role::Owner).iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["orders", "kitchen", "menu", "staff", "reports"]);
    }
}
