pub mod error;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use path::{NodePath, Segment, PATH_DELIMITER};
pub use value::{Introspect, Props, Value};
