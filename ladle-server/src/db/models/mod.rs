//! Database Models

pub mod employee;
pub mod menu_item;
pub mod order;
pub mod serde_helpers;

pub use employee::{Employee, EmployeeCreate, EmployeeResponse, EmployeeUpdate};
pub use menu_item::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{Order, OrderLine};
