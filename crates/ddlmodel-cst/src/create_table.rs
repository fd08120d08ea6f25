//! CREATE TABLE productions
//!
//! ```text
//! createTable
//!     : CREATE TABLE tableName LIKE tableName            # copyCreateTable
//!     | CREATE TABLE tableName createDefinitions? ... selectStatement  # queryCreateTable
//!     | CREATE TABLE tableName createDefinitions ...     # columnCreateTable
//!     ;
//! createDefinitions : '(' createDefinition (',' createDefinition)* ')' ;
//! createDefinition
//!     : uid columnDefinition                             # columnDeclaration
//!     | tableConstraint                                  # constraintDeclaration
//!     | indexColumnDefinition                            # indexDeclaration
//!     ;
//! ```

use crate::{ColumnDeclaration, IndexColumnNames, Node, Position, TableConstraint, Terminal};

/// Identifier of a column, index or constraint, possibly quoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uid(pub Terminal);

impl Uid {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Uid(Terminal::new(text, position))
    }

    pub fn text(&self) -> &str {
        self.0.text()
    }
}

impl Node for Uid {
    fn start(&self) -> Position {
        self.0.position
    }
}

/// Table name as written, possibly quoted or schema-qualified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(pub Terminal);

impl TableName {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        TableName(Terminal::new(text, position))
    }

    pub fn text(&self) -> &str {
        self.0.text()
    }
}

impl Node for TableName {
    fn start(&self) -> Position {
        self.0.position
    }
}

/// The alternatives of the `createTable` production
///
/// Statement forms are where the grammar grows between dialect versions, so the
/// enum is open; consumers must handle forms they do not know.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CreateTable {
    /// CREATE TABLE t2 (LIKE t1) / CREATE TABLE t2 LIKE t1
    Copy(CopyCreateTable),
    /// CREATE TABLE t2 [(...)] [AS] SELECT ...
    Query(QueryCreateTable),
    /// CREATE TABLE t (column and constraint list)
    Column(ColumnCreateTable),
}

impl Node for CreateTable {
    fn start(&self) -> Position {
        match self {
            CreateTable::Copy(c) => c.start,
            CreateTable::Query(q) => q.start,
            CreateTable::Column(c) => c.start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCreateTable {
    pub start: Position,
    pub table_name: TableName,
    pub source_table: TableName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCreateTable {
    pub start: Position,
    pub table_name: TableName,
    pub create_definitions: Option<CreateDefinitions>,
    /// Source text of the SELECT statement
    pub select_statement: Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCreateTable {
    pub start: Position,
    pub table_name: TableName,
    pub create_definitions: Option<CreateDefinitions>,
}

impl ColumnCreateTable {
    pub fn new(start: Position, table_name: TableName, definitions: Vec<CreateDefinition>) -> Self {
        ColumnCreateTable {
            start,
            table_name,
            create_definitions: Some(CreateDefinitions { definitions }),
        }
    }
}

/// Parenthesized list of column declarations and table constraints
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateDefinitions {
    pub definitions: Vec<CreateDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateDefinition {
    ColumnDeclaration(ColumnDeclaration),
    ConstraintDeclaration(ConstraintDeclaration),
    IndexDeclaration(IndexDeclaration),
}

impl Node for CreateDefinition {
    fn start(&self) -> Position {
        match self {
            CreateDefinition::ColumnDeclaration(c) => c.uid.start(),
            CreateDefinition::ConstraintDeclaration(c) => c.table_constraint.start(),
            CreateDefinition::IndexDeclaration(i) => i.start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDeclaration {
    pub table_constraint: TableConstraint,
}

/// `{INDEX | KEY} [index_name] (index_column_names)` without a constraint kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDeclaration {
    pub start: Position,
    pub index_name: Option<Uid>,
    pub index_column_names: IndexColumnNames,
}
