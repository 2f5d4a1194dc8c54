#![doc = include_str!("../README.md")]

pub mod ast;
pub mod coercion;
mod error;
pub mod lexer;
mod node;
pub mod schema;
mod source;
mod suggestion;

pub use crate::error::Error;
pub use crate::error::ErrorKind;
pub use crate::error::PathElement;
pub use crate::lexer::Lexer;
pub use crate::lexer::Token;
pub use crate::lexer::TokenId;
pub use crate::lexer::TokenKind;
pub use crate::lexer::TokenSpan;
pub use crate::lexer::TokenStream;
pub use crate::node::Node;
pub use crate::source::LineColumn;
pub use crate::source::Source;

/// A JSON-compatible value, as found in variable input and produced by
/// value coercion.
pub type JsonValue = serde_json_bytes::Value;

/// A JSON-compatible object, in insertion order.
pub type JsonMap = serde_json_bytes::Map<serde_json_bytes::ByteString, serde_json_bytes::Value>;
