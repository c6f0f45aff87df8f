//! tagmark - Markup tokenizer and hashtag registry
//!
//! The algorithmic core of a content portal: a lightweight markup tokenizer
//! (code fences, bullets, blockquotes, bold, italic, inline code, links,
//! hashtags) and a durable tag registry serving ranked autocomplete
//! suggestions.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagmarkError;
