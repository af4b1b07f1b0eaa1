use anyhow::{Context, Result};
use clap::Parser;
use rmcp::ServiceExt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use voicevox_mcp_core::engine::{ensure_running, ComposeLauncher, StartupPolicy};
use voicevox_mcp_core::playback::CommandPlayer;
use voicevox_mcp_core::{Settings, SpeechEngine, VoiceTools, VoicevoxEngine, VoicevoxMcpServer};

#[derive(Parser, Debug)]
#[command(name = "voicevox-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server for VOICEVOX text-to-speech")]
struct Args {
    /// Load settings from a TOML file instead of ~/.voicevox-mcp/settings.toml
    #[arg(long, value_name = "PATH")]
    settings_path: Option<PathBuf>,

    /// VOICEVOX engine base URL (overrides VOICEVOX_URL)
    #[arg(long, value_name = "URL")]
    engine_url: Option<String>,

    /// Default speaker style id (overrides SPEAKER_ID)
    #[arg(long, value_name = "ID")]
    speaker: Option<u32>,

    /// Do not try to start the engine with docker compose
    #[arg(long)]
    no_auto_start: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_tracing(args.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<()> {
    let mut settings = Settings::load(args.settings_path.as_deref())?;
    if let Some(url) = args.engine_url {
        settings.engine_url = url.trim_end_matches('/').to_string();
    }
    if let Some(speaker) = args.speaker {
        settings.default_speaker = speaker;
    }
    if args.no_auto_start {
        settings.auto_start_engine = false;
    }
    let settings = Arc::new(settings);

    info!(
        engine_url = %settings.engine_url,
        default_speaker = settings.default_speaker,
        auto_start = settings.auto_start_engine,
        "Starting VOICEVOX MCP server"
    );

    let engine = Arc::new(VoicevoxEngine::new(settings.engine_url.clone()));
    let launcher = ComposeLauncher::new(settings.compose_dir());

    let startup = ensure_running(
        settings.auto_start_engine,
        engine.as_ref(),
        &launcher,
        StartupPolicy::default(),
    )
    .await;
    info!(?startup, "Engine startup check finished");

    match engine.version().await {
        Ok(version) => info!(%version, "Connected to VOICEVOX Engine"),
        Err(e) => warn!(error = %e, "VOICEVOX Engine not reachable yet"),
    }

    let player = Arc::new(CommandPlayer::from_settings(&settings.player));
    let tools = VoiceTools::new(engine, player, settings.default_speaker);

    let service = VoicevoxMcpServer::new(tools)
        .serve(rmcp::transport::stdio())
        .await
        .context("Failed to start MCP server on stdio")?;

    let reason = service.waiting().await?;
    info!(?reason, "MCP server stopped");
    Ok(())
}

/// stdout carries the MCP protocol, so logs go to stderr or a file.
fn setup_tracing(log_file: Option<&std::path::Path>) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::fmt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {parent:?}"))?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {path:?}"))?;
            let (writer, guard) = tracing_appender::non_blocking(file);

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();

            info!("Tracing initialized to {:?}", path);
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(false)
                        .with_target(true),
                )
                .with(filter)
                .init();
            Ok(None)
        }
    }
}
