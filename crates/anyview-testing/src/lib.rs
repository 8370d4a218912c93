pub mod fixtures;

pub use fixtures::{profile, rich_funnel, simple_funnel};
