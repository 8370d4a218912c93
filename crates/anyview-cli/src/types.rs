use clap::ValueEnum;
use std::fmt;

/// Which viewer walks the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ViewStyle {
    OneLine,
    Simple,
    Tree,
    Table,
    Square,
}

impl fmt::Display for ViewStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStyle::OneLine => write!(f, "one-line"),
            ViewStyle::Simple => write!(f, "simple"),
            ViewStyle::Tree => write!(f, "tree"),
            ViewStyle::Table => write!(f, "table"),
            ViewStyle::Square => write!(f, "square"),
        }
    }
}

/// Output encoding. `json` and `yaml` always dump the full serializable
/// structure; the view style only shapes the text-like formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Md,
    Html,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Md => write!(f, "md"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
