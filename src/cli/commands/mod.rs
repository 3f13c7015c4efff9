//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod current;
pub mod list;
pub mod set;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed themes, icon themes, or cursor themes
    List(list::ListArgs),

    /// Show the theme, icon theme, cursor theme, and color scheme in use
    Current(current::CurrentArgs),

    /// Set the theme, icon theme, cursor theme, or color scheme
    Set(set::SetArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::List(args) => list::run(ctx, args),
        Commands::Current(args) => current::run(ctx, args),
        Commands::Set(args) => set::run(ctx, args),
    }
}
