//! Lexer and parser for the calc expression language.
//!
//! The [`tokenizer`] turns a statement into tokens, and the [`parser`] turns the tokens into an
//! [`Expr`](parser::ast::Expr) tree:
//!
//! ```
//! use calc_parser::parser::parse;
//!
//! let expr = parse("f(x) = x^2 + 1").unwrap();
//! assert_eq!(expr.to_string(), "f(x) = x^2 + 1");
//! ```

pub mod parser;
pub mod tokenizer;
