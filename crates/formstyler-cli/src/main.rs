//! `formstyler` command-line tool.

mod cli;
mod commands;
mod input;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = match &cli.command {
        Command::Compile {
            presets,
            output,
            no_header,
            no_important,
        } => commands::compile(presets, output.as_deref(), *no_header, *no_important)?,
        Command::Fonts { presets } => commands::fonts(presets)?,
        Command::Templates { show } => commands::templates(show.as_deref())?,
    };

    if !text.is_empty() {
        println!("{}", text.trim_end());
    }
    Ok(())
}

/// Logs go to stderr; `FORMSTYLER_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("FORMSTYLER_LOG")
        .init();
}
