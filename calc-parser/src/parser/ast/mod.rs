//! The abstract syntax tree produced by the parser and consumed by every later stage.

pub mod binary;
pub mod call;
pub mod expr;
pub mod nary;
pub mod unary;

pub use binary::Binary;
pub use call::{Call, Derivative};
pub use expr::Expr;
pub use nary::Nary;
pub use unary::Unary;
