//! lookctl set - Change one appearance setting
//!
//! Theme, icon, and cursor names must be installed (see `lookctl list`).
//! Setting a theme also guesses light or dark from its name unless
//! `--color-scheme` is given.

use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::assets::AssetCategory;
use crate::cli::commands::current::render_human;
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::error::Result;
use crate::selector::ThemeSelector;
use crate::settings::ThemeConfig;

#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(subcommand)]
    pub target: SetTarget,
}

#[derive(Subcommand, Debug)]
pub enum SetTarget {
    /// Set the GTK theme
    Theme {
        /// Installed theme name
        name: String,

        /// Force light or dark instead of guessing from the name
        #[arg(long, value_enum)]
        color_scheme: Option<ColorScheme>,
    },

    /// Set the icon theme
    Icon {
        /// Installed icon theme name
        name: String,
    },

    /// Set the cursor theme
    Cursor {
        /// Installed cursor theme name
        name: String,
    },

    /// Set the light/dark preference only
    ColorScheme {
        #[arg(value_enum)]
        scheme: ColorScheme,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub const fn prefer_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[derive(Serialize)]
struct SetResult<'a> {
    changed: &'a str,
    config: &'a ThemeConfig,
}

pub fn run(ctx: &AppContext, args: &SetArgs) -> Result<()> {
    let sync = ctx.sync();
    let selector = ThemeSelector::new(&ctx.dirs, &sync);

    let (changed, cfg) = match &args.target {
        SetTarget::Theme { name, color_scheme } => (
            AssetCategory::WidgetTheme.as_str(),
            selector.set_widget_theme(name, color_scheme.map(ColorScheme::prefer_dark))?,
        ),
        SetTarget::Icon { name } => (
            AssetCategory::IconTheme.as_str(),
            selector.set_icon_theme(name)?,
        ),
        SetTarget::Cursor { name } => (
            AssetCategory::CursorTheme.as_str(),
            selector.set_cursor_theme(name)?,
        ),
        SetTarget::ColorScheme { scheme } => (
            "color-scheme",
            selector.set_color_scheme(scheme.prefer_dark())?,
        ),
    };

    match ctx.output_format {
        OutputFormat::Human => {
            println!("{} {changed} changed successfully!", "✓".green().bold());
            println!();
            println!("{}", render_human(&cfg));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(SetResult {
            changed,
            config: &cfg,
        })),
        OutputFormat::Plain => {
            println!("{changed}");
            Ok(())
        }
    }
}
