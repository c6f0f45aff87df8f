//! Domain layer - Business logic and domain models

pub mod markup;
pub mod tags;

pub use markup::{tokenize, Token};
pub use tags::{TagEntry, TagRegistry};
