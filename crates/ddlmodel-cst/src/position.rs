//! Source positions and terminal text

use std::fmt;

/// Location of the first token of a node
///
/// `line` is 1-based and `column` is 0-based, as grammar runtimes report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token, or the literal source text spanned by a node, with its start position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    pub text: String,
    pub position: Position,
}

impl Terminal {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Terminal { text: text.into(), position }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Common accessors of every syntax tree node
pub trait Node {
    /// Position of the first token of the node
    fn start(&self) -> Position;
}

impl Node for Terminal {
    fn start(&self) -> Position {
        self.position
    }
}
