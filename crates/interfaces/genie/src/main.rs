#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use genie_app_core::{ConsoleSettings, Screen};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Versioned API prefix of the generation service
    #[arg(long, env = "GENIE_API_BASE", default_value = genie_config::DEFAULT_API_BASE)]
    api_base: String,
    #[arg(long, env = "GENIE_SETTLE_MS", default_value_t = genie_config::DEFAULT_SETTLE_DELAY_MS)]
    settle_ms: u64,
    #[arg(long, env = "GENIE_TIMEOUT_SECS", default_value_t = genie_config::DEFAULT_GENERATION_TIMEOUT_SECS)]
    timeout_secs: u64,
    /// Log preview addresses instead of opening the browser
    #[arg(long)]
    no_open: bool,
    /// Address or query the console was launched with, e.g. `?view=pricing`
    #[arg(long, env = "GENIE_LAUNCH_URL")]
    launch_url: Option<String>,
}

fn main() {
    let args = Args::parse();
    let settings = ConsoleSettings {
        api_base: args.api_base,
        settle_delay_ms: args.settle_ms,
        generation_timeout_secs: args.timeout_secs,
        open_previews: !args.no_open,
        ..ConsoleSettings::default()
    };
    let screen = Screen::from_launch_url(args.launch_url.as_deref());

    if let Err(err) = genie_ui::run(settings, screen) {
        eprintln!("Genie failed: {err:#}");
        std::process::exit(1);
    }
}
