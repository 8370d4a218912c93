pub mod graph;
pub mod link_type;

pub use graph::{Term, TermCard, TermGraph, TermId};
pub use link_type::LinkType;
