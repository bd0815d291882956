use crate::domain::model::OrderItem;
use crate::utils::error::{OrderDeskError, Result};
use crate::utils::validation::{validate_non_empty, validate_price, validate_quantity, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Declarative scenario file: a batch of orders to create followed by a
/// batch of cancellations to apply.
///
/// ```toml
/// [scenario]
/// name = "demo"
///
/// [[orders]]
/// id = "ord-1"
/// items = [{ name = "book", quantity = 2, price = 12.5 }]
///
/// [[cancellations]]
/// id = "ord-1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioMeta,
    #[serde(default)]
    pub orders: Vec<OrderRequest>,
    #[serde(default)]
    pub cancellations: Vec<CancellationRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub id: String,
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRequest {
    pub id: String,
}

impl OrderRequest {
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.items
            .iter()
            .map(|item| OrderItem::new(item.name.clone(), item.quantity, item.price))
            .collect()
    }
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScenarioConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("scenario.name", &self.scenario.name)?;

        let mut seen_ids = HashSet::new();
        for (index, order) in self.orders.iter().enumerate() {
            let field = format!("orders[{}].id", index);
            validate_non_empty(&field, &order.id)?;
            if !seen_ids.insert(order.id.as_str()) {
                return Err(OrderDeskError::InvalidConfigValue {
                    field,
                    value: order.id.clone(),
                    reason: "duplicate order id".to_string(),
                });
            }
            if order.items.is_empty() {
                return Err(OrderDeskError::ConfigError {
                    message: format!("order '{}' has no items", order.id),
                });
            }
            for (item_index, item) in order.items.iter().enumerate() {
                let prefix = format!("orders[{}].items[{}]", index, item_index);
                validate_non_empty(&format!("{}.name", prefix), &item.name)?;
                validate_quantity(&format!("{}.quantity", prefix), item.quantity)?;
                validate_price(&format!("{}.price", prefix), item.price)?;
            }
        }

        for (index, cancellation) in self.cancellations.iter().enumerate() {
            validate_non_empty(&format!("cancellations[{}].id", index), &cancellation.id)?;
        }

        Ok(())
    }
}
