//! Source selection
//!
//! Turns the user's source argument into a [`SourceCommand`] and runs the
//! matching loader from [`crate::input`].
//!
//! ```rust,ignore
//! use textlens::source::{load_source, parse_source};
//!
//! let doc = load_source(&parse_source("@notes.epub"))?;
//! ```

pub mod command;
pub mod parser;

pub use command::{load_source, SourceCommand};
pub use parser::parse_source;
