use ddlmodel_ast::{ColumnConstraint, ColumnDeclaration, ColumnDefinition, CreateTable, TableConstraint};
use ddlmodel_cst::{self as cst, Node, Position, Terminal};
use ddlmodel_types::{DataType, TypeKind};

use crate::{
    normalize::{normalize_identifier, normalize_string, normalize_type_name, normalize_value},
    ErrorKind, StatementForm, VisitError, VisitorConfig,
};

mod column_definition;
mod create_table;
mod data_type;
mod table_constraint;

const TRACE_TARGET: &str = "ddlmodel::visit";

/// Walks a CREATE TABLE syntax tree and builds its schema model
///
/// A visitor holds only configuration, so one instance can be shared across
/// threads and reused for any number of trees.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    prefix: Option<String>,
    debug: bool,
}

impl Visitor {
    pub fn new() -> Self {
        Visitor::default()
    }

    pub fn with_config(config: &VisitorConfig) -> Self {
        Visitor { prefix: config.source_prefix.clone(), debug: config.debug }
    }

    /// Prefix diagnostics with a source identifier such as a file name
    pub fn with_source_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Emit a trace line for every visited production
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn source_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    fn trace(&self, production: &str) {
        if self.debug {
            tracing::debug!(target: TRACE_TARGET, "Visit Trace: {}", production);
        }
    }

    fn error_at(&self, position: Position, kind: ErrorKind) -> VisitError {
        let error = VisitError { kind, position, source_prefix: self.prefix.clone() };
        tracing::warn!(target: TRACE_TARGET, %error, "CREATE TABLE rejected");
        error
    }
}
