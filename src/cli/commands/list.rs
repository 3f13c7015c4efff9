//! lookctl list - List installed assets of one category

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::assets::{self, AssetCategory};
use crate::cli::output::{OutputFormat, emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum, default_value = "theme")]
    pub category: AssetCategory,
}

#[derive(Debug, Serialize)]
struct AssetList<'a> {
    category: AssetCategory,
    count: usize,
    assets: &'a [String],
}

pub fn run(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let names = assets::installed(&ctx.dirs, args.category);
    debug!(target: "list", category = %args.category, count = names.len(), "listing assets");

    match ctx.output_format {
        OutputFormat::Human => {
            display_list_human(args.category, &names);
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(AssetList {
            category: args.category,
            count: names.len(),
            assets: &names,
        })),
        OutputFormat::Plain => {
            for name in &names {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn display_list_human(category: AssetCategory, names: &[String]) {
    if names.is_empty() {
        println!("No {} installed", plural(category));
        return;
    }

    for (i, name) in names.iter().enumerate() {
        println!("{} {name}", format!("[{}]", i + 1).dimmed());
    }
}

const fn plural(category: AssetCategory) -> &'static str {
    match category {
        AssetCategory::WidgetTheme => "themes",
        AssetCategory::IconTheme => "icon themes",
        AssetCategory::CursorTheme => "cursor themes",
    }
}
