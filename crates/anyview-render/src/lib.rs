pub mod defaults;
pub mod viewers;
pub mod views;
pub mod visual;

pub use viewers::{
    BarChartViewer, OneLineViewer, PairBarChartViewer, SerialViewer, SimpleTextViewer,
    SquareViewer, TableViewer, TreeViewer, Viewer,
};
pub use views::{
    FormattedView, SerialFormat, SerialView, SquareView, TableView, TextView, ViewItem,
};
pub use visual::{FontMetrics, Size1, Size2, Style, Tag, Unit};
