//! lookctl current - Show the live appearance settings

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_json, robot_ok};
use crate::error::Result;
use crate::settings::ThemeConfig;

#[derive(Args, Debug)]
pub struct CurrentArgs {}

pub fn run(ctx: &AppContext, _args: &CurrentArgs) -> Result<()> {
    let cfg = ctx.sync().current()?;

    match ctx.output_format {
        OutputFormat::Human => {
            println!("{}", render_human(&cfg));
            Ok(())
        }
        OutputFormat::Json => emit_json(&robot_ok(&cfg)),
        OutputFormat::Plain => {
            for (key, value) in fields(&cfg) {
                println!("{key}\t{value}");
            }
            Ok(())
        }
    }
}

fn fields(cfg: &ThemeConfig) -> [(&'static str, &str); 4] {
    [
        ("theme", cfg.widget_theme.as_str()),
        ("icon", cfg.icon_theme.as_str()),
        ("cursor", cfg.cursor_theme.as_str()),
        ("color-scheme", cfg.color_scheme()),
    ]
}

pub(crate) fn render_human(cfg: &ThemeConfig) -> String {
    let mut layout = HumanLayout::new();
    layout
        .kv("GTK Theme", &cfg.widget_theme)
        .kv("Icon Theme", &cfg.icon_theme)
        .kv("Cursor Theme", &cfg.cursor_theme)
        .kv("Color Scheme", cfg.color_scheme());
    layout.build()
}
