//! Permission Definitions
//!
//! Role-based access control for the four staff roles.
//!
//! ## Design
//! - One fixed role→capability table, loaded into the binary as const data.
//!   API authorization and navigation filtering both derive from it; there
//!   is no second table that could drift.
//! - Feature access is a separate fixed table mapping feature names to the
//!   capabilities that unlock them (any one suffices).
//! - Role management uses a hardcoded hierarchy, not a capability check.

use crate::role::{Capability, Role};

/// Owner holds every capability
const OWNER_CAPABILITIES: &[Capability] = &[
    Capability::ViewOrders,
    Capability::UpdateOrderStatus,
    Capability::ManageMenu,
    Capability::ViewReports,
    Capability::ManageStaff,
    Capability::ProcessPayments,
    Capability::ViewCustomerData,
];

const MANAGER_CAPABILITIES: &[Capability] = &[
    Capability::ViewOrders,
    Capability::UpdateOrderStatus,
    Capability::ManageMenu,
    Capability::ViewReports,
    Capability::ManageStaff,
    Capability::ProcessPayments,
    Capability::ViewCustomerData,
];

/// Kitchen only sees and advances orders
const CHEF_CAPABILITIES: &[Capability] = &[Capability::ViewOrders, Capability::UpdateOrderStatus];

const WAITER_CAPABILITIES: &[Capability] = &[
    Capability::ViewOrders,
    Capability::UpdateOrderStatus,
    Capability::ProcessPayments,
    Capability::ViewCustomerData,
];

/// Feature → capabilities that unlock it (any one suffices)
///
/// Feature names are a closed, versioned set shared with the clients.
const FEATURE_CAPABILITIES: &[(&str, &[Capability])] = &[
    ("orders", &[Capability::ViewOrders]),
    ("kitchen", &[Capability::UpdateOrderStatus]),
    ("menu", &[Capability::ManageMenu]),
    ("reports", &[Capability::ViewReports]),
    ("staff", &[Capability::ManageStaff]),
    ("payments", &[Capability::ProcessPayments]),
    ("customers", &[Capability::ViewCustomerData]),
];

/// Capabilities held by a role
///
/// Total over the closed [`Role`] set.
pub fn capabilities_of(role: Role) -> &'static [Capability] {
    match role {
        Role::Owner => OWNER_CAPABILITIES,
        Role::Manager => MANAGER_CAPABILITIES,
        Role::Chef => CHEF_CAPABILITIES,
        Role::Waiter => WAITER_CAPABILITIES,
    }
}

/// Whether the role holds a single capability
pub fn has_capability(role: Role, capability: Capability) -> bool {
    capabilities_of(role).contains(&capability)
}

/// Whether the role holds at least one of the capabilities
///
/// Empty input returns `false`: no capability can satisfy the check.
pub fn has_any_capability(role: Role, capabilities: &[Capability]) -> bool {
    capabilities.iter().any(|c| has_capability(role, *c))
}

/// Whether the role holds every one of the capabilities
///
/// Empty input returns `true` (vacuous truth).
pub fn has_all_capabilities(role: Role, capabilities: &[Capability]) -> bool {
    capabilities.iter().all(|c| has_capability(role, *c))
}

/// Endpoint authorization check used by the request middleware
///
/// The caller must hold every listed capability.
pub fn check_access(role: Role, required: &[Capability]) -> bool {
    has_all_capabilities(role, required)
}

/// Whether the role may access a named feature area
///
/// Unknown feature names return `false` rather than an error: the feature
/// set is closed and versioned, the caller does not control it.
pub fn can_access_feature(role: Role, feature: &str) -> bool {
    FEATURE_CAPABILITIES
        .iter()
        .find(|(name, _)| *name == feature)
        .is_some_and(|(_, required)| has_any_capability(role, required))
}

/// Role hierarchy check for staff management
///
/// Owner manages everyone (including other owners), manager manages chef
/// and waiter, chef and waiter manage nobody. This is a separate hardcoded
/// hierarchy, not a capability lookup.
pub fn can_manage(acting: Role, target: Role) -> bool {
    match acting {
        Role::Owner => true,
        Role::Manager => matches!(target, Role::Chef | Role::Waiter),
        Role::Chef | Role::Waiter => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::{ALL_CAPABILITIES, ALL_ROLES};

    /// The fixed table, spelled out pair by pair
    fn expected(role: Role, capability: Capability) -> bool {
        use Capability::*;
        match role {
            Role::Owner | Role::Manager => true,
            Role::Chef => matches!(capability, ViewOrders | UpdateOrderStatus),
            Role::Waiter => matches!(
                capability,
                ViewOrders | UpdateOrderStatus | ProcessPayments | ViewCustomerData
            ),
        }
    }

    #[test]
    fn capability_grid_matches_table() {
        for role in ALL_ROLES {
            for capability in ALL_CAPABILITIES {
                assert_eq!(
                    has_capability(*role, *capability),
                    expected(*role, *capability),
                    "{role} / {capability}"
                );
            }
        }
    }

    #[test]
    fn every_role_has_capabilities() {
        for role in ALL_ROLES {
            assert!(!capabilities_of(*role).is_empty());
        }
    }

    #[test]
    fn empty_capability_lists_pin_conventions() {
        for role in ALL_ROLES {
            assert!(!has_any_capability(*role, &[]));
            assert!(has_all_capabilities(*role, &[]));
            assert!(check_access(*role, &[]));
        }
    }

    #[test]
    fn has_all_requires_every_capability() {
        assert!(has_all_capabilities(
            Role::Waiter,
            &[Capability::ViewOrders, Capability::ProcessPayments]
        ));
        assert!(!has_all_capabilities(
            Role::Waiter,
            &[Capability::ViewOrders, Capability::ManageMenu]
        ));
    }

    #[test]
    fn feature_access_follows_any_semantics() {
        for (feature, required) in FEATURE_CAPABILITIES {
            for role in ALL_ROLES {
                assert_eq!(
                    can_access_feature(*role, feature),
                    has_any_capability(*role, required),
                    "{role} / {feature}"
                );
            }
        }
    }

    #[test]
    fn unknown_feature_is_denied() {
        assert!(!can_access_feature(Role::Owner, "billing"));
        assert!(!can_access_feature(Role::Owner, ""));
    }

    #[test]
    fn owner_manages_everyone() {
        for target in ALL_ROLES {
            assert!(can_manage(Role::Owner, *target));
        }
    }

    #[test]
    fn manager_manages_kitchen_and_floor_only() {
        assert!(can_manage(Role::Manager, Role::Chef));
        assert!(can_manage(Role::Manager, Role::Waiter));
        assert!(!can_manage(Role::Manager, Role::Manager));
        assert!(!can_manage(Role::Manager, Role::Owner));
    }

    #[test]
    fn chef_and_waiter_manage_nobody() {
        for acting in [Role::Chef, Role::Waiter] {
            for target in ALL_ROLES {
                assert!(!can_manage(acting, *target), "{acting} / {target}");
            }
        }
    }
}
