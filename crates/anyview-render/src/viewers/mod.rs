pub mod chart;
pub mod one_line;
pub mod serial;
pub mod simple_text;
pub mod square;
pub mod table;
pub mod tree;

pub use chart::{BarChartViewer, PairBarChartViewer};
pub use one_line::OneLineViewer;
pub use serial::SerialViewer;
pub use simple_text::SimpleTextViewer;
pub use square::SquareViewer;
pub use table::TableViewer;
pub use tree::TreeViewer;

use crate::views::ViewItem;
use anyview_core::Node;
use anyview_types::Result;

/// A strategy that walks a node and builds a view.
///
/// Concrete viewers also expose typed `get_view` methods returning their
/// specific view type; this object-safe surface exists for the process
/// default viewer and other dynamic call sites.
pub trait Viewer {
    fn render(&self, node: &Node) -> Result<ViewItem>;
}
