//! Model catalog: section-delimited parsing and membership queries.

pub mod parse;
pub mod types;

pub use parse::*;
pub use types::*;
