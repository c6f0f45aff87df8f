//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagmark")]
#[command(about = "Markup tokenizer and tag registry for portal notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tag store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Tokenize a document, print its token stream, and register its hashtags
    Render {
        /// Document to render
        file: PathBuf,
    },

    /// Register hashtags from every document under a directory
    Scan {
        /// Directory to scan (default: the store root)
        dir: Option<PathBuf>,
    },

    /// List registered tags, most used first
    Tags {
        /// Only tags in this namespace
        #[arg(short, long)]
        namespace: Option<String>,

        /// Only the most popular tags (configured limit unless --limit is given)
        #[arg(short, long)]
        popular: bool,

        /// Cap the number of tags shown
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Suggest completions for a partially typed hashtag
    Suggest {
        /// Partial tag text, with or without the leading '#'
        term: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
