pub mod formatted;
pub mod serial;
pub mod square;
pub mod table;
pub mod text;

pub use formatted::{FormattedView, ViewItem};
pub use serial::{SerialFormat, SerialView};
pub use square::SquareView;
pub use table::TableView;
pub use text::TextView;

/// Indent step shared by the Markdown and HTML emitters
pub(crate) const INDENT_UNIT: &str = "  ";
