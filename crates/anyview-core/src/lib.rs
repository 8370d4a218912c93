pub mod node;
pub mod round;
pub mod text;

pub use node::Node;
pub use round::{max_chart_value, smart_round};
pub use text::{cap_newline_runs, crop, DEFAULT_LINE_LEN};
