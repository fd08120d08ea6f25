use std::fmt;

use ddlmodel_cst::Position;

/// CREATE TABLE forms that are recognized but not modeled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementForm {
    /// CREATE TABLE ... LIKE
    Copy,
    /// CREATE TABLE ... [AS] SELECT
    Query,
}

impl fmt::Display for StatementForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementForm::Copy => write!(f, "copying from another table"),
            StatementForm::Query => write!(f, "querying from another table"),
        }
    }
}

/// Reasons a visit is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("Unsupported creating a table by {0}")]
    UnsupportedStatementForm(StatementForm),
    #[error("Unsupported reference definition")]
    UnsupportedColumnConstraint,
    #[error("Unsupported foreign key constraint")]
    UnsupportedTableConstraint,
    #[error("invalid data type: {0}")]
    InvalidDataType(String),
    #[error("Unknown creating a table")]
    UnknownStatement,
}

/// Positioned diagnostic for the first construct a visit could not model
///
/// Rendered as `"<prefix> line <L>:<C> <message>"` when a source prefix is
/// configured and as `"<L>:<C> <message>"` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitError {
    pub kind: ErrorKind,
    pub position: Position,
    pub source_prefix: Option<String>,
}

impl VisitError {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        VisitError { kind, position, source_prefix: None }
    }

    pub fn with_source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.source_prefix = Some(prefix.into());
        self
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for VisitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                write!(f, "{} line {}:{} {}", prefix, self.position.line, self.position.column, self.kind)
            }
            _ => write!(f, "{}:{} {}", self.position.line, self.position.column, self.kind),
        }
    }
}

impl std::error::Error for VisitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
