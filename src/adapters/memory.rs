use crate::core::OrderRepository;
use crate::domain::model::Order;
use std::collections::HashMap;

/// In-process order store backed by a `HashMap`. Lifetime is the process;
/// nothing is ever deleted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: HashMap<String, Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&mut self, order: Order) {
        self.orders.insert(order.id.clone(), order);
    }

    fn get_by_id(&self, id: &str) -> Option<Order> {
        self.orders.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OrderItem;

    #[test]
    fn test_save_and_get() {
        let mut repo = InMemoryOrderRepository::new();
        assert!(repo.is_empty());

        let order = Order::new("ord-1", vec![OrderItem::new("book", 1, 10.0)]);
        repo.save(order.clone());

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get_by_id("ord-1"), Some(order));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let repo = InMemoryOrderRepository::new();
        assert_eq!(repo.get_by_id("does-not-exist"), None);
    }

    #[test]
    fn test_save_overwrites_same_id() {
        let mut repo = InMemoryOrderRepository::new();
        repo.save(Order::new("ord-1", vec![OrderItem::new("book", 1, 10.0)]));

        let mut updated = repo.get_by_id("ord-1").unwrap();
        updated.cancel();
        repo.save(updated);

        assert_eq!(repo.len(), 1);
        assert!(repo.get_by_id("ord-1").unwrap().is_canceled());
    }
}
