//! lookctl - desktop appearance control
//!
//! List, show, and change GTK, icon, and cursor themes.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lookctl::Result;
use lookctl::app::AppContext;
use lookctl::cli::{Cli, OutputFormat};
use lookctl::config::{Config, XdgDirs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let dirs = XdgDirs::from_env();
    let config = Config::load(cli.config.as_deref(), &dirs);

    // An unusable config file still reports its error in the requested format.
    let configured = config.as_ref().map_or_else(
        |_| Config::from_env().output.format,
        |config| config.output.format,
    );
    let format = cli.output_format(configured);
    let robot = format == OutputFormat::Json;
    init_tracing(&cli, robot);

    match config.and_then(|config| run(&cli, &AppContext::new(dirs, config, format))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if robot {
                // Robot mode: JSON error output to stdout
                let error_json = serde_json::json!({
                    "error": true,
                    "code": e.code(),
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, ctx: &AppContext) -> Result<()> {
    lookctl::cli::commands::run(ctx, &cli.command)
}

fn init_tracing(cli: &Cli, robot: bool) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,lookctl=info",
        1 => "info,lookctl=debug",
        2 => "debug,lookctl=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
