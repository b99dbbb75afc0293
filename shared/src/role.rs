//! Role and Capability definitions
//!
//! Both sets are closed: a role is assigned at account creation and is
//! immutable for the session, capabilities are fixed fine-grained rights.
//! The role→capability mapping lives in [`crate::permissions`] and is the
//! single source of truth for API authorization and navigation filtering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Staff role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Manager,
    Chef,
    Waiter,
}

/// All roles, in hierarchy order
pub const ALL_ROLES: &[Role] = &[Role::Owner, Role::Manager, Role::Chef, Role::Waiter];

impl Role {
    /// Role name as stored in the database and JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Manager => "manager",
            Role::Chef => "chef",
            Role::Waiter => "waiter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role names outside the closed set
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "manager" => Ok(Role::Manager),
            "chef" => Ok(Role::Chef),
            "waiter" => Ok(Role::Waiter),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Fine-grained permission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ViewOrders,
    UpdateOrderStatus,
    ManageMenu,
    ViewReports,
    ManageStaff,
    ProcessPayments,
    ViewCustomerData,
}

/// All capabilities (7)
pub const ALL_CAPABILITIES: &[Capability] = &[
    Capability::ViewOrders,
    Capability::UpdateOrderStatus,
    Capability::ManageMenu,
    Capability::ViewReports,
    Capability::ManageStaff,
    Capability::ProcessPayments,
    Capability::ViewCustomerData,
];

impl Capability {
    /// Capability name as used in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ViewOrders => "VIEW_ORDERS",
            Capability::UpdateOrderStatus => "UPDATE_ORDER_STATUS",
            Capability::ManageMenu => "MANAGE_MENU",
            Capability::ViewReports => "VIEW_REPORTS",
            Capability::ManageStaff => "MANAGE_STAFF",
            Capability::ProcessPayments => "PROCESS_PAYMENTS",
            Capability::ViewCustomerData => "VIEW_CUSTOMER_DATA",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in ALL_ROLES {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(
            "admin".parse::<Role>(),
            Err(UnknownRole("admin".to_string()))
        );
    }
}
