//! 订单生命周期模块
//!
//! - [`lifecycle`] - 纯校验逻辑：创建校验、状态机合法性
//! - [`service`] - 持久化编排：创建订单、乐观并发的状态转换
//! - [`OrderError`] - 订单领域错误

pub mod error;
pub mod lifecycle;
pub mod service;

pub use error::OrderError;
pub use service::OrderLifecycle;
