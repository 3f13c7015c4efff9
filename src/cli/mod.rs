//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "lookctl",
    version,
    about = "Inspect and switch GTK, icon, and cursor themes",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: $XDG_CONFIG_HOME/lookctl/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Machine-readable JSON output (same as --format json)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Flags win over the configured default.
    #[must_use]
    pub fn output_format(&self, configured: OutputFormat) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            self.format.unwrap_or(configured)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCategory;
    use crate::cli::commands::set::{ColorScheme, SetTarget};

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_widget_themes() {
        let cli = Cli::try_parse_from(["lookctl", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.category, AssetCategory::WidgetTheme),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn set_theme_with_color_scheme_override() {
        let cli =
            Cli::try_parse_from(["lookctl", "set", "theme", "Nordic", "--color-scheme", "light"])
                .unwrap();
        match cli.command {
            Commands::Set(args) => match args.target {
                SetTarget::Theme { name, color_scheme } => {
                    assert_eq!(name, "Nordic");
                    assert_eq!(color_scheme, Some(ColorScheme::Light));
                }
                other => panic!("unexpected target: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn robot_flag_forces_json() {
        let cli = Cli::try_parse_from(["lookctl", "--robot", "current"]).unwrap();
        assert_eq!(cli.output_format(OutputFormat::Plain), OutputFormat::Json);

        let cli = Cli::try_parse_from(["lookctl", "current"]).unwrap();
        assert_eq!(cli.output_format(OutputFormat::Plain), OutputFormat::Plain);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["lookctl", "list", "fonts"]).is_err());
        assert!(Cli::try_parse_from(["lookctl", "set", "wallpaper", "x"]).is_err());
    }
}
