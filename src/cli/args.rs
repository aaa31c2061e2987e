//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::options::{Color, Orientation};

/// Render trees as box-drawn diagrams
#[derive(Parser, Debug)]
#[command(name = "boxtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(
        short,
        long,
        global = true,
        env = "BOXTREE_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw an indented outline as a tree
    Render(RenderArgs),

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Outline file, stdin when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Node color
    #[arg(long, value_enum)]
    pub color: Option<Color>,

    /// Draw a full box around every node
    #[arg(long)]
    pub border: bool,

    /// Show line breaks in labels as \n
    #[arg(long)]
    pub escape_newlines: bool,

    /// Truncate labels after N characters (-1 = unlimited)
    #[arg(long, allow_negative_numbers = true)]
    pub trim: Option<i64>,

    /// Do not draw nodes below this depth (-1 = unlimited)
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Depth the root is assumed to sit at
    #[arg(long, default_value_t = 0)]
    pub depth: usize,

    /// Layout direction
    #[arg(long, value_enum)]
    pub orientation: Option<Orientation>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show the global config file location
    Path,
}
