//! Binary entrypoint: runs a carousel headless, driven by commands on stdin
//! or from a script file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gallery_carousel::Carousel;
use gallery_carousel::commands::Command;
use gallery_carousel::config::Configuration;
use gallery_carousel::events::Input;
use gallery_carousel::headless::HeadlessSurface;
use gallery_carousel::runtime;
use gallery_carousel::timer::AutoAdvance;

#[derive(Debug, Parser)]
#[command(name = "carousel", version, about = "Headless looping image carousel")]
struct Args {
    /// Path to YAML config
    #[arg(value_name = "CONFIG")]
    config: PathBuf,
    /// Override the startup viewport width (px)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,
    /// Override the auto-advance period (ms)
    #[arg(long, value_name = "MILLIS")]
    delay_ms: Option<u64>,
    /// Read commands from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut cfg = Configuration::from_yaml_file(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;
    if let Some(width) = args.width {
        cfg.viewport_width = width;
    }
    if let Some(ms) = args.delay_ms {
        cfg.auto_advance = Duration::from_millis(ms);
    }
    let cfg = cfg.validated().context("invalid configuration values")?;

    let items = cfg.item_sequence()?;
    let carousel = Carousel::new(HeadlessSurface::new(), items, cfg.carousel_options())
        .context("failed to bind carousel")?;

    let (input_tx, input_rx) = mpsc::channel::<Input>(32);
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("ctrl-c handler failed: {err}");
                return;
            }
            info!("ctrl-c received; initiating shutdown");
            cancel.cancel();
        });
    }

    let mut auto_advance = AutoAdvance::new(cfg.auto_advance);
    if carousel.is_enabled() {
        auto_advance.start(input_tx.clone(), cancel.clone());
    }

    let reader = {
        let cancel = cancel.clone();
        let script = args.script.clone();
        let settle = cfg.transition;
        tokio::spawn(async move {
            let result = read_commands(script, input_tx, &cancel).await;
            // Let the last slide finish before shutting down.
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep(settle * 2) => {}
            }
            cancel.cancel();
            result
        })
    };

    let carousel = runtime::run(carousel, input_rx, cfg.transition, cancel.clone()).await?;
    cancel.cancel();
    reader.await.context("command reader panicked")??;

    let snapshot = carousel.snapshot();
    info!(
        real_index = snapshot.real_index,
        visible = snapshot.visible,
        modal_open = snapshot.modal.is_open(),
        "carousel stopped"
    );
    Ok(())
}

async fn read_commands(
    script: Option<PathBuf>,
    to_carousel: mpsc::Sender<Input>,
    cancel: &CancellationToken,
) -> Result<()> {
    match script {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("failed to open script {}", path.display()))?;
            forward_commands(BufReader::new(file), to_carousel, cancel).await
        }
        None => forward_commands(BufReader::new(tokio::io::stdin()), to_carousel, cancel).await,
    }
}

/// Parse one command per line and forward inputs until `quit` or end of input.
async fn forward_commands<R>(
    reader: R,
    to_carousel: mpsc::Sender<Input>,
    cancel: &CancellationToken,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line.context("failed to read command")?,
        };
        let Some(line) = line else {
            info!("command input closed; initiating shutdown");
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match trimmed.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Input(input)) => {
                if to_carousel.send(input).await.is_err() {
                    break;
                }
            }
            Err(err) => warn!("{err:#}"),
        }
    }
    Ok(())
}
