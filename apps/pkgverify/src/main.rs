//! pkgverify - check a packaged archive before it is published
//!
//! The CLI loads configuration, builds the operations context, and runs one
//! operation from the ops crate while rendering its events.

mod cli;
mod display;
mod error;
mod events;
mod logging;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use pkgverify_config::Config;
use pkgverify_events::EventReceiver;
use pkgverify_ops::{OperationResult, OpsContextBuilder, OpsCtx, TestOutput};
use pkgverify_types::{ColorChoice, OutputFormat};
use std::path::PathBuf;
use std::process;
use tokio::select;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        if json_mode {
            println!("{}", e.to_json());
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting pkgverify v{}", env!("CARGO_PKG_VERSION"));

    // 1. file config (or defaults)
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;

    // 2. environment
    config.merge_env()?;

    // 3. CLI flags (highest precedence)
    apply_cli_config(&mut config, &cli.global);
    config.validate()?;

    let json_output = cli.global.json || config.general.default_output == OutputFormat::Json;
    let color = effective_color(&config);

    let (event_sender, event_receiver) = pkgverify_events::channel();

    let ops_ctx = OpsContextBuilder::new()
        .with_event_sender(event_sender)
        .with_config(config)
        .with_test_output(if json_output {
            TestOutput::Stderr
        } else {
            TestOutput::Inherit
        })
        .build()?;

    let renderer = OutputRenderer::new(json_output, color);

    let colors_enabled = match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => console::Term::stderr().features().colors_supported(),
    };
    let mut event_handler = EventHandler::new(colors_enabled, cli.global.debug, json_output);

    let result =
        execute_command_with_events(cli.command, ops_ctx, event_receiver, &mut event_handler)
            .await?;

    renderer.render_result(&result)?;

    info!("Command completed successfully");
    Ok(())
}

/// Execute command with concurrent event handling
async fn execute_command_with_events(
    command: Commands,
    ops_ctx: OpsCtx,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> Result<OperationResult, CliError> {
    let mut command_future = Box::pin(execute_command(command, ops_ctx));

    loop {
        select! {
            result = &mut command_future => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result;
            }

            event = event_receiver.recv() => {
                if let Some(event) = event {
                    event_handler.handle_event(event);
                }
            }
        }
    }
}

/// Execute the specified command
async fn execute_command(command: Commands, ctx: OpsCtx) -> Result<OperationResult, CliError> {
    match command {
        Commands::Verify { dir } => {
            let root = resolve_root(dir)?;
            let report = pkgverify_ops::verify(&ctx, &root).await?;
            Ok(OperationResult::Verification(report))
        }
        Commands::Config => {
            let rendered = pkgverify_ops::show_config(&ctx)?;
            Ok(OperationResult::Config(rendered))
        }
    }
}

/// The directory to verify, made absolute against the current directory
fn resolve_root(dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let cwd = std::env::current_dir()?;
    let root = match dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    if !root.is_dir() {
        return Err(CliError::InvalidArguments(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    Ok(root)
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, global: &cli::GlobalArgs) {
    if let Some(color) = global.color {
        config.general.color = color;
    }
    if global.json {
        config.general.default_output = OutputFormat::Json;
    }
}

/// Plain output never carries color unless it was explicitly forced
fn effective_color(config: &Config) -> ColorChoice {
    match (config.general.default_output, config.general.color) {
        (OutputFormat::Plain, ColorChoice::Auto) => ColorChoice::Never,
        (_, color) => color,
    }
}

/// Directory for debug log files
fn log_dir() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("pkgverify")
        .join("logs")
}

/// Initialize tracing/logging
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;
    let file_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("info,pkgverify=debug,pkgverify_ops=debug")
        })
    };

    if debug_enabled {
        let log_dir = log_dir();
        let log_file = log_dir.join(format!(
            "pkgverify-{}.log",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        ));

        let file = std::fs::create_dir_all(&log_dir).and_then(|()| std::fs::File::create(&log_file));
        match file {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_env_filter(file_filter())
                    .init();
                if !json_mode {
                    eprintln!("Debug logging enabled: {}", log_file.display());
                }
                return;
            }
            Err(e) if !json_mode => {
                eprintln!("Warning: Failed to create log file: {e}");
            }
            Err(_) => {}
        }
    }

    if json_mode {
        // keep stdout and stderr free of log lines
        tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter("off")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("warn,pkgverify=warn,pkgverify_ops=warn")
                }),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_disables_auto_color() {
        let mut config = Config::default();
        config.general.default_output = OutputFormat::Plain;
        assert_eq!(effective_color(&config), ColorChoice::Never);

        config.general.color = ColorChoice::Always;
        assert_eq!(effective_color(&config), ColorChoice::Always);
    }

    #[test]
    fn json_flag_overrides_config_output() {
        let cli = Cli::try_parse_from(["pkgverify", "--json", "config"]).unwrap();
        let mut config = Config::default();
        apply_cli_config(&mut config, &cli.global);
        assert_eq!(config.general.default_output, OutputFormat::Json);
    }

    #[test]
    fn missing_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            resolve_root(Some(missing)),
            Err(CliError::InvalidArguments(_))
        ));
        assert_eq!(resolve_root(Some(dir.path().to_path_buf())).unwrap(), dir.path());
    }
}
