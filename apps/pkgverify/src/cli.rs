//! Command line interface definition

use clap::{Parser, Subcommand};
use pkgverify_types::ColorChoice;
use std::path::PathBuf;

/// pkgverify - check a packaged archive before it is published
#[derive(Parser)]
#[command(name = "pkgverify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check a packaged archive before it is published")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Write debug logs to the pkgverify log directory
    #[arg(long, global = true)]
    pub debug: bool,

    /// Color output control
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract the archive, check its contents and run its tests
    #[command(alias = "v")]
    Verify {
        /// Directory holding the archive (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_verify_with_globals() {
        let cli = Cli::try_parse_from([
            "pkgverify", "verify", "--dir", "dist", "--json", "--color", "never",
        ])
        .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.color, Some(ColorChoice::Never));
        match cli.command {
            Commands::Verify { dir } => assert_eq!(dir, Some(PathBuf::from("dist"))),
            Commands::Config => panic!("expected verify"),
        }
    }

    #[test]
    fn requires_a_command() {
        assert!(Cli::try_parse_from(["pkgverify"]).is_err());
    }
}
