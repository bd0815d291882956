pub mod runner;
pub mod service;

pub use crate::domain::model::{Order, OrderItem, OrderStatus};
pub use crate::domain::ports::OrderRepository;
pub use crate::utils::error::Result;
