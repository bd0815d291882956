use clap::Parser;
use order_desk::utils::{logger, validation::Validate};
use order_desk::{
    CliConfig, InMemoryOrderRepository, OrderService, OutputFormat, ScenarioConfig,
    ScenarioRunner, ScenarioSummary,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-desk");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let scenario = ScenarioConfig::from_file(&config.scenario)?;
    scenario.validate()?;

    let repository = InMemoryOrderRepository::new();
    let service = OrderService::with_cancel_mode(repository, config.cancel_mode);
    let mut runner = ScenarioRunner::new(service);

    let summary = runner.run(&scenario);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Text => print_summary(&summary),
    }

    Ok(())
}

fn print_summary(summary: &ScenarioSummary) {
    println!("Scenario: {}", summary.scenario);
    println!("Orders:");
    for order in &summary.orders {
        println!(
            "  {} [{}] {} item(s), total {:.2}",
            order.id, order.status, order.items, order.total
        );
    }
    if !summary.cancellations.is_empty() {
        println!("Cancellations:");
        for cancellation in &summary.cancellations {
            let outcome = if cancellation.ok { "ok" } else { "rejected" };
            println!("  {} {}", cancellation.id, outcome);
        }
    }
    println!("Open total: {:.2}", summary.open_total);
}
