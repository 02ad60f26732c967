//! tcalc - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use tcalc::config::KeyBindings;
use tcalc::model::AppError;
use tcalc::view::ColorConfig;

/// Terminal four-function calculator with a clickable keypad
#[derive(Parser, Debug)]
#[command(name = "tcalc")]
#[command(version)]
#[command(about = "Terminal four-function calculator with a clickable keypad")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep color handling consistent for anything that checks NO_COLOR
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration with the full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tcalc::config::load_config_with_precedence(args.config.clone())?;
        let merged = tcalc::config::merge_config(config_file);
        let with_env = tcalc::config::apply_env_overrides(merged);

        let no_color_override = if args.no_color { Some(true) } else { None };
        tcalc::config::apply_cli_overrides(with_env, no_color_override, args.log_file.clone())
    };

    let key_bindings = KeyBindings::from_section(&config.keybindings)?;
    let color_config = ColorConfig::from_env_and_args(config.no_color);

    tcalc::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    tcalc::view::run(key_bindings, color_config)?;

    Ok(())
}
