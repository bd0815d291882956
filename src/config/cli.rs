use crate::core::service::CancelMode;
use crate::utils::validation::{validate_non_empty, Validate};
use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "order-desk")]
#[command(about = "A small in-memory order management tool")]
pub struct CliConfig {
    /// Path to the TOML scenario file to run
    #[arg(long, default_value = "./scenario.toml")]
    pub scenario: String,

    /// How repeat cancellations of the same order are reported
    #[arg(long, value_enum, default_value_t = CancelMode::Strict)]
    pub cancel_mode: CancelMode,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty("scenario", &self.scenario)
    }
}
