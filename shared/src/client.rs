//! Client-facing request/response DTOs
//!
//! Shared between the server API and the dashboard clients so both sides
//! agree on the wire shape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;
use crate::role::Role;

/// Login request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: Role,
    /// Derived from the role table, never stored per user
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// One line of a create-order request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderLine {
    /// Menu item record id ("menu_item:xyz")
    pub menu_item: String,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Create order request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub table_number: i32,
    pub lines: Vec<CreateOrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

/// Order status update request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// One priced line of an order as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineView {
    pub menu_item: String,
    /// Name snapshot taken at order time
    pub name: String,
    /// Price snapshot taken at order time
    pub unit_price: Decimal,
    pub quantity: i32,
    pub line_total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Full order as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,
    pub table_number: i32,
    pub lines: Vec<OrderLineView>,
    pub status: OrderStatus,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
