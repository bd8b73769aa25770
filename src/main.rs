//! Feedback form - present a feedback report form in the terminal

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use feedback_form::config::{Appearance, Screenshot, Snapshot, StaticLogSupport};
use feedback_form::paths;
use std::path::{Path, PathBuf};
use std::rc::Rc;

mod tui;

/// Present a feedback report form in the terminal
#[derive(Parser)]
#[command(name = "feedback-form")]
#[command(author, version, about, long_about = None)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag maps to one snapshot input"
)]
struct Cli {
    /// Appearance file (JSON); defaults to the per-user config location
    #[arg(long)]
    appearance: Option<PathBuf>,

    /// Screenshot file to attach
    #[arg(long)]
    screenshot: Option<PathBuf>,

    /// Screenshot dimensions as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_dimensions, default_value = "0x0")]
    screenshot_size: (u32, u32),

    /// Log collection is not available
    #[arg(long)]
    no_log_collector: bool,

    /// Collected logs cannot be viewed
    #[arg(long)]
    no_log_viewer: bool,

    /// Start with log collection enabled
    #[arg(long)]
    collect_logs: bool,

    /// Start with the screenshot attached
    #[arg(long)]
    include_screenshot: bool,

    /// Print the final choices as JSON on exit
    #[arg(long)]
    print_choices: bool,
}

fn parse_dimensions(value: &str) -> Result<(u32, u32)> {
    let Some((width, height)) = value.split_once('x') else {
        bail!("expected WIDTHxHEIGHT, got {value:?}");
    };
    Ok((
        width.parse().context("invalid width")?,
        height.parse().context("invalid height")?,
    ))
}

fn load_screenshot(path: Option<&Path>, (width, height): (u32, u32)) -> Result<Screenshot> {
    let Some(path) = path else {
        return Ok(Screenshot::new("screenshot.png", width, height, Vec::new()));
    };

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read screenshot from {}", path.display()))?;
    let label = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    Ok(Screenshot::new(label, width, height, bytes))
}

fn init_logging() {
    // Clear the log file on startup
    let log_path = paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender =
            tracing_appender::rolling::never(std::env::temp_dir(), paths::LOG_FILE_NAME);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let appearance = match &cli.appearance {
        Some(path) => Appearance::load_from(path)?,
        None => Appearance::load()?,
    };
    let logs = StaticLogSupport {
        collector: !cli.no_log_collector,
        viewer: !cli.no_log_viewer,
    };
    let screenshot = load_screenshot(cli.screenshot.as_deref(), cli.screenshot_size)?;

    let snapshot = Snapshot::capture(
        &appearance,
        &logs,
        Rc::new(screenshot),
        cli.collect_logs,
        cli.include_screenshot,
    );

    let app = tui::run(tui::App::new(snapshot))?;

    if cli.print_choices {
        let choices = serde_json::to_string_pretty(&app.form.choices())
            .context("Failed to serialize choices")?;
        println!("{choices}");
    }

    Ok(())
}
