use anyhow::Context;
use genie_app_core::pipeline::RETRY_PROMPT;
use genie_app_core::{AppCommand, ConsoleSettings, GenieConsole, Screen};
use genie_core::{AssetId, GeneratedAsset};
use genie_pipeline::{Endpoints, PipelineClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Runs one generation to completion and returns the new asset id.
pub async fn cmd_generate(
    settings: ConsoleSettings,
    brief: String,
    avoid: String,
) -> anyhow::Result<AssetId> {
    println!(":: Deploying agents...");
    println!("   Service: {}", settings.api_base);

    let mut console = GenieConsole::connect(&settings, Screen::Generate)
        .context("Failed to connect to the generation service")?;

    console.dispatch(AppCommand::EditBrief(brief));
    console.dispatch(AppCommand::EditAvoidTopics(avoid));
    let run_id = console.start_generation()?;
    tracing::debug!(%run_id, "Run scheduled");

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut shown = None;
    loop {
        let run = console.store.with_state(|s| s.run.clone());
        let line = (run.progress_percent, run.log_message.clone());
        if shown.as_ref() != Some(&line) {
            pb.set_message(format!("{}% {}", line.0, line.1));
            shown = Some(line);
        }
        if !run.is_generating() {
            break;
        }
        if !console.next_event().await {
            break;
        }
    }

    let state = console.store.state();
    match state.last_completed {
        Some(id) if !state.run.is_generating() => {
            pb.finish_with_message(state.run.log_message.clone());
            if let Some(url) = console.preview_url(&id) {
                println!("   Asset:   {id}");
                println!("   Preview: {url}");
            }
            Ok(id)
        }
        _ => {
            pb.abandon_with_message(RETRY_PROMPT);
            match state.run.failure {
                Some(e) => anyhow::bail!("Generation failed at {}%: {e}", state.run.progress_percent),
                None => anyhow::bail!("Generation failed at {}%", state.run.progress_percent),
            }
        }
    }
}

/// Prints the vault listing, newest first as returned by the service.
pub async fn cmd_history(settings: ConsoleSettings) -> anyhow::Result<Vec<GeneratedAsset>> {
    let http = genie_infra::default_http_client()?;
    let client =
        genie_pipeline::default_client(http, &settings.api_base, settings.request_timeouts())?;

    let assets = client
        .list_history()
        .await
        .context("Failed to load history")?;

    println!(":: Vault ({} assets)", assets.len());
    for a in &assets {
        println!(
            "   [{}] {:<12} {:>3}%  {}",
            a.id,
            a.category().to_uppercase(),
            a.confidence(),
            a.title()
        );
    }

    Ok(assets)
}

/// Opens the preview of `id`, or prints it with `--no-open`.
pub fn cmd_preview(settings: ConsoleSettings, id: String) -> anyhow::Result<String> {
    let id = AssetId::new(id);
    let url = Endpoints::new(&settings.api_base)?.preview(&id)?.to_string();

    println!("{url}");
    if settings.open_previews {
        genie_infra::open_url(&url).context("Failed to open preview")?;
    }
    Ok(url)
}
