//! Table constraint productions
//!
//! ```text
//! tableConstraint
//!     : (CONSTRAINT name=uid?)? PRIMARY KEY index=uid? indexType? indexColumnNames ...   # primaryKeyTableConstraint
//!     | (CONSTRAINT name=uid?)? UNIQUE indexFormat=(INDEX | KEY)? index=uid? ...
//!           indexColumnNames ...                                                       # uniqueKeyTableConstraint
//!     | (CONSTRAINT name=uid?)? FOREIGN KEY index=uid? indexColumnNames
//!           referenceDefinition                                                        # foreignKeyTableConstraint
//!     | (CONSTRAINT name=uid?)? CHECK '(' expression ')'                               # checkTableConstraint
//!     ;
//! indexColumnNames : '(' indexColumnName (',' indexColumnName)* ')' ;
//! indexColumnName : ((uid | STRING_LITERAL) ('(' decimalLiteral ')')? | expression) sortType=(ASC | DESC)? ;
//! ```

use crate::{Node, Position, Terminal, Uid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    PrimaryKey(PrimaryKeyTableConstraint),
    UniqueKey(UniqueKeyTableConstraint),
    ForeignKey(ForeignKeyTableConstraint),
    /// Spanned text of the CHECK constraint
    Check(Terminal),
}

impl Node for TableConstraint {
    fn start(&self) -> Position {
        match self {
            TableConstraint::PrimaryKey(c) => c.start,
            TableConstraint::UniqueKey(c) => c.start,
            TableConstraint::ForeignKey(c) => c.start,
            TableConstraint::Check(t) => t.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyTableConstraint {
    pub start: Position,
    pub name: Option<Uid>,
    pub index_column_names: IndexColumnNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKeyTableConstraint {
    pub start: Position,
    pub name: Option<Uid>,
    pub index_name: Option<Uid>,
    pub index_column_names: IndexColumnNames,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyTableConstraint {
    pub start: Position,
    pub name: Option<Uid>,
    pub index_column_names: IndexColumnNames,
    /// Spanned text of the `referenceDefinition`
    pub reference_definition: Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexColumnNames {
    pub names: Vec<IndexColumnName>,
}

impl IndexColumnNames {
    pub fn new(names: Vec<IndexColumnName>) -> Self {
        IndexColumnNames { names }
    }
}

/// One column reference of a key definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexColumnName {
    Uid(Uid),
    StringLiteral(Terminal),
}

impl Node for IndexColumnName {
    fn start(&self) -> Position {
        match self {
            IndexColumnName::Uid(uid) => uid.start(),
            IndexColumnName::StringLiteral(t) => t.position,
        }
    }
}
