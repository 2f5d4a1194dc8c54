use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// The raw UTF-8 text of one GraphQL document.
///
/// Owns the byte buffer for the lifetime of a parse/coercion pass and
/// resolves byte offsets to line and column numbers. The line index is built
/// lazily the first time a location is requested.
pub struct Source {
    text: String,
    line_starts: OnceLock<Vec<usize>>,
}

/// A line number and column number within a GraphQL document.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineColumn {
    /// The line number for this location, starting at 1 for the first line.
    pub line: usize,
    /// The column number for this location, starting at 1 and counting
    /// characters (Unicode scalar values) like [`str::chars`].
    pub column: usize,
}

impl fmt::Debug for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_starts: OnceLock::new(),
        }
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Resolve a byte offset to a 1-based line and column.
    ///
    /// Line terminators are `\n`, `\r\n`, and lone `\r`; a `\r\n` pair counts
    /// as a single terminator. Offsets past the end of the text resolve to
    /// the end of the last line.
    pub fn line_column(&self, offset: usize) -> LineColumn {
        let offset = offset.min(self.text.len());
        let starts = self.line_starts();
        let line = starts.partition_point(|&start| start <= offset);
        let line_start = starts[line - 1];
        let column = self.text[line_start..offset].chars().count() + 1;
        LineColumn { line, column }
    }

    fn line_starts(&self) -> &[usize] {
        self.line_starts.get_or_init(|| {
            let bytes = self.text.as_bytes();
            let mut starts = vec![0];
            let mut i = 0;
            while i < bytes.len() {
                match bytes[i] {
                    b'\n' => {
                        i += 1;
                        starts.push(i);
                    }
                    b'\r' => {
                        i += 1;
                        if bytes.get(i) == Some(&b'\n') {
                            i += 1;
                        }
                        starts.push(i);
                    }
                    _ => i += 1,
                }
            }
            starts
        })
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").field("text", &self.text).finish()
    }
}
