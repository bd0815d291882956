use crate::core::{Order, OrderItem, OrderRepository};
use serde::{Deserialize, Serialize};

/// How `cancel_order` treats an order that is already canceled.
///
/// The status transition itself is one-way either way; the mode only decides
/// what a repeat cancellation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum CancelMode {
    /// Only a fresh `Created -> Canceled` transition returns `true`;
    /// canceling an already-canceled order returns `false`.
    #[default]
    Strict,
    /// Canceling an already-canceled order is a no-op success (`true`).
    Idempotent,
}

/// Orchestrates order creation and cancellation, delegating all storage to
/// the repository. Holds no order state of its own.
pub struct OrderService<R: OrderRepository> {
    repository: R,
    cancel_mode: CancelMode,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            cancel_mode: CancelMode::default(),
        }
    }

    pub fn with_cancel_mode(repository: R, cancel_mode: CancelMode) -> Self {
        Self {
            repository,
            cancel_mode,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Constructs an order with status `CREATED` from the given items and
    /// identifier, persists it, and returns a copy. The identifier is
    /// supplied by the caller; the service never generates one. Always
    /// succeeds.
    pub fn create_order(&mut self, items: Vec<OrderItem>, order_id: impl Into<String>) -> Order {
        let order = Order::new(order_id, items);
        tracing::debug!(
            order_id = %order.id,
            items = order.items.len(),
            total = order.total(),
            "creating order"
        );
        self.repository.save(order.clone());
        order
    }

    /// Cancels the order with the given identifier.
    ///
    /// Returns `false` with no side effect when the id is unknown. For an
    /// order that is already canceled, the return value follows the
    /// configured [`CancelMode`]; the repository is left untouched either
    /// way.
    pub fn cancel_order(&mut self, order_id: &str) -> bool {
        let Some(mut order) = self.repository.get_by_id(order_id) else {
            tracing::debug!(order_id, "cancel requested for unknown order");
            return false;
        };

        if order.is_canceled() {
            tracing::debug!(order_id, "order already canceled");
            return self.cancel_mode == CancelMode::Idempotent;
        }

        order.cancel();
        self.repository.save(order);
        tracing::debug!(order_id, "order canceled");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::core::OrderStatus;

    fn sample_items() -> Vec<OrderItem> {
        vec![OrderItem::new("book", 2, 12.5), OrderItem::new("pen", 3, 1.2)]
    }

    #[test]
    fn test_create_order_persists_and_returns_copy() {
        let mut service = OrderService::new(InMemoryOrderRepository::new());
        let order = service.create_order(sample_items(), "ord-1");

        assert_eq!(order.id, "ord-1");
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(service.repository().get_by_id("ord-1"), Some(order));
    }

    #[test]
    fn test_cancel_unknown_order_is_false_and_no_op() {
        let mut service = OrderService::new(InMemoryOrderRepository::new());
        assert!(!service.cancel_order("does-not-exist"));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn test_cancel_existing_order() {
        let mut service = OrderService::new(InMemoryOrderRepository::new());
        service.create_order(sample_items(), "ord-1");

        assert!(service.cancel_order("ord-1"));
        let stored = service.repository().get_by_id("ord-1").unwrap();
        assert_eq!(stored.status, OrderStatus::Canceled);
        assert!(stored.canceled_at.is_some());
    }

    #[test]
    fn test_second_cancel_strict_is_false() {
        let mut service = OrderService::new(InMemoryOrderRepository::new());
        service.create_order(sample_items(), "X");

        assert!(service.cancel_order("X"));
        assert!(!service.cancel_order("X"));
    }

    #[test]
    fn test_second_cancel_idempotent_is_true() {
        let mut service =
            OrderService::with_cancel_mode(InMemoryOrderRepository::new(), CancelMode::Idempotent);
        service.create_order(sample_items(), "X");

        assert!(service.cancel_order("X"));
        assert!(service.cancel_order("X"));
    }

    #[test]
    fn test_second_cancel_keeps_first_timestamp() {
        let mut service =
            OrderService::with_cancel_mode(InMemoryOrderRepository::new(), CancelMode::Idempotent);
        service.create_order(sample_items(), "X");
        service.cancel_order("X");
        let first = service.repository().get_by_id("X").unwrap().canceled_at;

        service.cancel_order("X");
        let second = service.repository().get_by_id("X").unwrap().canceled_at;
        assert_eq!(first, second);
    }
}
