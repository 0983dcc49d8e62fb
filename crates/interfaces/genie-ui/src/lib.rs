mod app;
mod components;
mod screens;
mod theme;
mod utils;

use genie_app_core::{AppCommand, ConsoleSettings, GenieConsole, Screen};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run(settings: ConsoleSettings, screen: Screen) -> anyhow::Result<()> {
    setup_logging();

    let mut core = GenieConsole::connect(&settings, screen)?;
    core.dispatch(AppCommand::LoadInitialState);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("GENIE // OPS"),
        ..Default::default()
    };

    eframe::run_native(
        "GenieOps",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::GenieUiApp::new(core)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {e}"))
}
