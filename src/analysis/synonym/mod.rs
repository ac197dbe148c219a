//! Core synonym functionality for the synonym graph filter.
//!
//! - [`map`] - Rule model and the compiled lookup structure
//! - [`parser`] - Line-oriented rule syntax front-end (swappable; the
//!   filter itself only consumes parsed rules)

pub mod map;
pub mod parser;

pub use map::{SynonymMap, SynonymRule};
