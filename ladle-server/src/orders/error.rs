//! Order domain errors

use thiserror::Error;

use shared::order::OrderStatus;
use shared::role::Role;

use crate::utils::AppError;

/// Errors raised by order creation and status transitions
///
/// All of these are client errors surfaced synchronously to the HTTP
/// boundary. Only [`OrderError::StaleState`] is worth an automatic retry,
/// and only once: the caller should refetch the order and reissue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("an order must contain at least one line")]
    EmptyOrder,

    #[error("invalid table number: {0}")]
    InvalidTableNumber(i32),

    #[error("invalid quantity {quantity} for '{item}'")]
    InvalidQuantity { item: String, quantity: i32 },

    #[error("unknown menu item: {0}")]
    UnknownMenuItem(String),

    #[error("menu item '{0}' is currently unavailable")]
    ItemUnavailable(String),

    #[error("no transition from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("role {role} may not move an order from {from} to {to}")]
    Forbidden {
        role: Role,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("order left status {expected} while the transition was in flight")]
    StaleState { expected: OrderStatus },
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::EmptyOrder
            | OrderError::InvalidTableNumber(_)
            | OrderError::InvalidQuantity { .. }
            | OrderError::UnknownMenuItem(_)
            | OrderError::ItemUnavailable(_) => AppError::Validation(err.to_string()),
            OrderError::IllegalTransition { .. } => AppError::IllegalTransition(err.to_string()),
            OrderError::Forbidden { .. } => AppError::Forbidden(err.to_string()),
            OrderError::StaleState { .. } => AppError::StaleState(err.to_string()),
        }
    }
}
