use crate::utils::error::{OrderDeskError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderDeskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_quantity(field_name: &str, quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(OrderDeskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: quantity.to_string(),
            reason: "quantity must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(OrderDeskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "price must be a finite number".to_string(),
        });
    }
    if price < 0.0 {
        return Err(OrderDeskError::InvalidConfigValue {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "price cannot be negative".to_string(),
        });
    }
    Ok(())
}
