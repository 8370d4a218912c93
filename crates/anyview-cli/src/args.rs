use crate::types::{OutputFormat, ViewStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anyview")]
#[command(about = "Inspect structured documents and render them in any format", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON or YAML document
    Render {
        /// Input document (JSON tried first, then YAML)
        file: PathBuf,

        #[arg(long, default_value = "tree")]
        view: ViewStyle,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Recursion depth limit for tree/simple/square views and
        /// serialized output
        #[arg(long)]
        depth: Option<u32>,

        /// Render only the node at this path (e.g. `users/0/name`)
        #[arg(long)]
        path: Option<String>,

        /// Drop null and zero-length entries from serialized output
        #[arg(long)]
        skip_empty: bool,

        /// Substitute identities for nested objects in serialized output
        #[arg(long)]
        use_ids: bool,
    },

    /// Render a bar chart from a category -> value mapping
    Chart {
        /// Input document (JSON tried first, then YAML)
        file: PathBuf,

        #[arg(long, default_value_t = 480.0)]
        width: f64,

        #[arg(long, default_value_t = 270.0)]
        height: f64,

        /// Width of the axis-label column, in pixels
        #[arg(long, default_value_t = 75.0)]
        axis_width: f64,

        /// Add a percentage-of-row-total companion chart
        #[arg(long)]
        pair: bool,
    },
}
