//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Compile form-styling presets into scoped CSS.
#[derive(Debug, Parser)]
#[command(name = "formstyler", version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate presets and write the compiled stylesheet
    Compile {
        /// Presets file (.yaml, .yml or .json)
        presets: PathBuf,

        /// Write CSS to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit the generation timestamp comment
        #[arg(long)]
        no_header: bool,

        /// Write override rules without !important
        #[arg(long)]
        no_important: bool,
    },

    /// Print the web-font URL the presets need
    Fonts {
        /// Presets file (.yaml, .yml or .json)
        presets: PathBuf,
    },

    /// List the built-in style templates
    Templates {
        /// Print one template's settings as YAML
        #[arg(long, value_name = "KEY")]
        show: Option<String>,
    },
}
