pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};
pub use config::ScenarioConfig;

pub use adapters::memory::InMemoryOrderRepository;
pub use core::runner::{ScenarioRunner, ScenarioSummary};
pub use core::service::{CancelMode, OrderService};
pub use domain::model::{Order, OrderItem, OrderStatus};
pub use domain::ports::OrderRepository;
pub use utils::error::{OrderDeskError, Result};
