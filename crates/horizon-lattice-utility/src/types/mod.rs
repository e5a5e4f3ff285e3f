//! Typed style primitives produced by the token lexer.

mod token;
pub(crate) mod value;

pub use token::{PropertyFamily, StyleToken, TokenValue};
