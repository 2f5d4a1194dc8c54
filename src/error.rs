use crate::source::LineColumn;
use serde::Serialize;

/// Which subsystem produced an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Produced only by the lexer; fatal for the current parse.
    Syntax,
    /// Produced by value coercion.
    Coercion,
    /// Wraps any other failure, such as a scalar adapter error.
    Generic,
}

/// A structured error, serializable to the GraphQL response error format.
///
/// `message`, `locations`, and `path` serialize; `kind` and `cause` are for
/// programmatic inspection only. `cause` retains the inner failure when an
/// error wraps another (for example, argument assembly wrapping a literal
/// coercion error) and is reachable through [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("{message}")]
pub struct Error {
    #[serde(skip)]
    pub kind: ErrorKind,

    pub message: String,

    /// Locations relevant to the error, if any; 1-based.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LineColumn>,

    /// For coercion errors: where in the input value the error occurred.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathElement>,

    #[serde(skip)]
    #[source]
    pub cause: Option<Box<Error>>,
}

/// An element of [`Error::path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathElement {
    /// The relevant key in an object value.
    Field(String),
    /// The index of the relevant item in a list value.
    ListIndex(usize),
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            cause: None,
        }
    }

    pub fn syntax(message: impl Into<String>, location: LineColumn) -> Self {
        Self::new(ErrorKind::Syntax, message).with_location(location)
    }

    pub fn coercion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Coercion, message)
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Generic, message)
    }

    /// Append a location, if one is given.
    pub fn with_location(mut self, location: impl Into<Option<LineColumn>>) -> Self {
        if let Some(location) = location.into() {
            self.locations.push(location);
        }
        self
    }

    pub fn with_path(mut self, path: Vec<PathElement>) -> Self {
        self.path = path;
        self
    }

    pub fn with_cause(mut self, cause: Error) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Print a value path as `value.foo[0].bar`.
pub(crate) fn format_path(path: &[PathElement]) -> String {
    use std::fmt::Write;

    let mut out = String::from("value");
    for element in path {
        match element {
            PathElement::Field(name) => {
                out.push('.');
                out.push_str(name);
            }
            PathElement::ListIndex(index) => {
                let _ = write!(out, "[{index}]");
            }
        }
    }
    out
}
