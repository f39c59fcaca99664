use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minidoc::client::DraftApiClient;
use minidoc::config::AppConfig;
use minidoc::history::HistoryView;
use minidoc::models::{DocumentFormat, Draft};
use minidoc::workflow::DraftWorkflow;

#[derive(Parser)]
#[command(name = "mdoc")]
#[command(about = "Iterative document drafting against the minidoc services")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the drafting pipeline: generate, evaluate, optionally export
    Run {
        /// Draft seed file (JSON)
        #[arg(short, long)]
        draft: PathBuf,

        /// Number of evaluation rounds after generation
        #[arg(short, long, default_value = "0")]
        evaluate: u32,

        /// Export format after the pipeline ('doc' or 'ppt')
        #[arg(long)]
        export: Option<String>,

        /// Output path for the exported document
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Base URL of the drafting services (overrides config)
        #[arg(short, long)]
        server: Option<String>,
    },
}

/// Initialize tracing with an env-filter honoring RUST_LOG.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "minidoc=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Run {
            draft,
            evaluate,
            export,
            out,
            server,
        } => run(draft, evaluate, export, out, server).await,
    }
}

async fn run(
    draft_path: PathBuf,
    evaluate_rounds: u32,
    export: Option<String>,
    out: Option<PathBuf>,
    server: Option<String>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();
    let server_url = server.unwrap_or(config.server_url);

    let seed = fs::read_to_string(&draft_path)
        .with_context(|| format!("Failed to read draft file {}", draft_path.display()))?;
    let seed: Draft = serde_json::from_str(&seed).context("Failed to parse draft file")?;

    let client = DraftApiClient::new(server_url);
    let mut workflow = DraftWorkflow::with_draft(seed, client);

    tracing::info!("Generating content for '{}'", workflow.draft().main_topic);
    workflow.generate().await?;
    tracing::info!(
        "Received {} generated sections",
        workflow.draft().generated_content.len()
    );

    for round in 1..=evaluate_rounds {
        tracing::info!("Evaluation round {}/{}", round, evaluate_rounds);
        workflow.evaluate().await?;
    }

    print_history(&workflow);

    if let Some(format) = export {
        let format = DocumentFormat::from_str(&format)
            .ok_or_else(|| anyhow::anyhow!("Export format must be 'doc' or 'ppt'"))?;
        let document = workflow.export(format).await?;

        let path = match out {
            Some(path) => {
                fs::write(&path, &document.bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                path
            }
            None => document
                .save_to(std::path::Path::new("."))
                .context("Failed to save exported document")?,
        };
        tracing::info!("Exported {} bytes to {}", document.bytes.len(), path.display());
    }

    Ok(())
}

fn print_history<S>(workflow: &DraftWorkflow<S>) {
    let view = HistoryView::new();
    for row in view.rows(&workflow.draft().evaluation_history) {
        println!(
            "Run #{} [{}] score {:.2}: {}",
            row.run,
            row.band.as_str(),
            row.record.coherency_score,
            row.record.diagnostic_summary
        );
    }
}
