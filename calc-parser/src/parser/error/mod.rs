//! Errors that can occur while tokenizing or parsing a statement.

pub mod kind;

pub use calc_error::Error;
