pub mod commands;

use clap::Args;
use genie_app_core::ConsoleSettings;

/// Connection flags shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct ServiceArgs {
    /// Versioned API prefix of the generation service
    #[arg(long, env = "GENIE_API_BASE", default_value = genie_config::DEFAULT_API_BASE, global = true)]
    pub api_base: String,
    /// Delay between the last pipeline stage and the completion side effects
    #[arg(long, env = "GENIE_SETTLE_MS", default_value_t = genie_config::DEFAULT_SETTLE_DELAY_MS, global = true)]
    pub settle_ms: u64,
    /// Timeout of each generation call
    #[arg(long, env = "GENIE_TIMEOUT_SECS", default_value_t = genie_config::DEFAULT_GENERATION_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
    /// Print preview addresses instead of opening them
    #[arg(long, global = true)]
    pub no_open: bool,
}

impl ServiceArgs {
    pub fn settings(&self) -> ConsoleSettings {
        ConsoleSettings {
            api_base: self.api_base.clone(),
            settle_delay_ms: self.settle_ms,
            generation_timeout_secs: self.timeout_secs,
            open_previews: !self.no_open,
            ..ConsoleSettings::default()
        }
    }
}
