use crate::config::scenario::ScenarioConfig;
use crate::core::service::OrderService;
use crate::core::OrderRepository;
use serde::Serialize;

/// Drives an [`OrderService`] through a declarative scenario: create every
/// listed order, then apply every listed cancellation, collecting a summary
/// of what happened.
pub struct ScenarioRunner<R: OrderRepository> {
    service: OrderService<R>,
}

/// Outcome of one created order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderOutcome {
    pub id: String,
    pub items: usize,
    pub total: f64,
    pub status: String,
}

/// Outcome of one cancellation request.
#[derive(Debug, Clone, Serialize)]
pub struct CancellationOutcome {
    pub id: String,
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub scenario: String,
    pub orders: Vec<OrderOutcome>,
    pub cancellations: Vec<CancellationOutcome>,
    /// Grand total over orders still in `CREATED` state after the run.
    pub open_total: f64,
}

impl<R: OrderRepository> ScenarioRunner<R> {
    pub fn new(service: OrderService<R>) -> Self {
        Self { service }
    }

    pub fn into_service(self) -> OrderService<R> {
        self.service
    }

    pub fn run(&mut self, config: &ScenarioConfig) -> ScenarioSummary {
        tracing::info!(scenario = %config.scenario.name, "running scenario");

        tracing::info!("creating {} orders", config.orders.len());
        let mut orders = Vec::with_capacity(config.orders.len());
        for request in &config.orders {
            let order = self
                .service
                .create_order(request.order_items(), request.id.clone());
            tracing::info!(order_id = %order.id, total = order.total(), "order created");
            orders.push(OrderOutcome {
                id: order.id.clone(),
                items: order.items.len(),
                total: order.total(),
                status: order.status.to_string(),
            });
        }

        tracing::info!("applying {} cancellations", config.cancellations.len());
        let mut cancellations = Vec::with_capacity(config.cancellations.len());
        for request in &config.cancellations {
            let ok = self.service.cancel_order(&request.id);
            if ok {
                tracing::info!(order_id = %request.id, "cancellation applied");
            } else {
                tracing::warn!(order_id = %request.id, "cancellation rejected");
            }
            cancellations.push(CancellationOutcome {
                id: request.id.clone(),
                ok,
            });
        }

        // Re-read final state from the repository so the summary reflects
        // cancellations, not creation-time snapshots.
        let repo = self.service.repository();
        let mut open_total = 0.0;
        for outcome in &mut orders {
            if let Some(order) = repo.get_by_id(&outcome.id) {
                outcome.status = order.status.to_string();
                if !order.is_canceled() {
                    open_total += order.total();
                }
            }
        }

        tracing::info!(open_total, "scenario finished");
        ScenarioSummary {
            scenario: config.scenario.name.clone(),
            orders,
            cancellations,
            open_total,
        }
    }
}
