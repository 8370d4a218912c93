pub mod size;
pub mod style;
pub mod tag;
pub mod unit;

pub use size::{Size1, Size2};
pub use style::Style;
pub use tag::Tag;
pub use unit::{FontMetrics, Unit};
