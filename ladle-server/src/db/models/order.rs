//! Order Model
//!
//! One table's active transaction. Lines are embedded in the order record
//! and owned exclusively by it; the total is always recomputed from the
//! lines, never edited independently. Orders are never deleted — they end
//! in `SERVED` or `CANCELLED`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::client::{OrderLineView, OrderView};
use shared::order::OrderStatus;

use super::serde_helpers;

/// One menu item within an order, with the name/price snapshot taken at
/// order time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub line_total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub table_number: i32,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_helpers::option_record_id", skip_serializing_if = "Option::is_none")]
    pub created_by: Option<RecordId>,
}

impl Order {
    /// Convert to the client-facing wire form
    pub fn into_view(self) -> OrderView {
        OrderView {
            id: self.id.map(|id| id.to_string()).unwrap_or_default(),
            table_number: self.table_number,
            lines: self
                .lines
                .into_iter()
                .map(|line| OrderLineView {
                    menu_item: line.menu_item.to_string(),
                    name: line.name,
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    line_total: line.line_total,
                    note: line.note,
                })
                .collect(),
            status: self.status,
            total: self.total,
            customer_name: self.customer_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            created_by: self.created_by.map(|id| id.to_string()),
        }
    }
}
