use clap::{Parser, Subcommand};
use genie_cli::{commands, ServiceArgs};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(flatten)]
    service: ServiceArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the two-stage pipeline for a brief
    Generate {
        brief: String,
        #[arg(long, default_value = "", help = "Existing content to avoid")]
        avoid: String,
    },
    /// List previously generated assets
    History,
    /// Open the rendered preview of an asset
    Preview { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let settings = cli.service.settings();
    match cli.command {
        Commands::Generate { brief, avoid } => {
            commands::cmd_generate(settings, brief, avoid).await?;
        }
        Commands::History => {
            commands::cmd_history(settings).await?;
        }
        Commands::Preview { id } => {
            commands::cmd_preview(settings, id)?;
        }
    }

    Ok(())
}
