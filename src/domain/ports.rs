use crate::domain::model::Order;

/// Storage port for orders, keyed by identifier.
///
/// Both operations are infallible by contract: `save` inserts or overwrites
/// and always succeeds, `get_by_id` signals absence with `None`. The backing
/// store makes no concurrent-access guarantees; callers in multi-threaded
/// contexts must serialize access externally.
pub trait OrderRepository {
    /// Inserts or overwrites the order under its identifier.
    fn save(&mut self, order: Order);

    /// Returns a copy of the order with the given identifier, if any.
    /// No side effects.
    fn get_by_id(&self, id: &str) -> Option<Order>;
}
