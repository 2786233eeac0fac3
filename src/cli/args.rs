//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::OutputFormat;

/// TRISHAFT site metadata: page titles and the category taxonomy
#[derive(Parser, Debug)]
#[command(name = "trishaft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Additional config file layered over the global one
    #[arg(
        short,
        long,
        global = true,
        env = "TRISHAFT_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page title for an optional fragment
    Title {
        /// Page fragment placed before the site title
        fragment: Option<String>,
    },

    /// Inspect the category taxonomy
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },

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

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories in display order
    List {
        /// Output format (default from settings)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show one category
    Show {
        /// Category tag, e.g. "rust"
        category: String,
        /// Output format (default from settings)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Dump the category table as JSON
    Data,

    /// Show categories as a tree under the site title
    Tree,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Print a config template
    Template,
}
