//! Shared types for the Ladle restaurant management system
//!
//! Types used by both the server and its clients: the closed role and
//! capability sets, the role→capability table with all derived permission
//! queries, the order status protocol, navigation entries, and client DTOs.

pub mod client;
pub mod navigation;
pub mod order;
pub mod permissions;
pub mod role;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use navigation::{NavItem, navigation_for};
pub use order::OrderStatus;
pub use role::{Capability, Role, UnknownRole};
