//! Column declaration productions
//!
//! ```text
//! columnDefinition : dataType columnConstraint* ;
//! columnConstraint
//!     : nullNotnull                                       # nullColumnConstraint
//!     | DEFAULT defaultValue                              # defaultColumnConstraint
//!     | (AUTO_INCREMENT | ON UPDATE currentTimestamp)     # autoIncrementColumnConstraint
//!     | PRIMARY? KEY                                      # primaryKeyColumnConstraint
//!     | UNIQUE KEY?                                       # uniqueKeyColumnConstraint
//!     | COMMENT STRING_LITERAL                            # commentColumnConstraint
//!     | COLUMN_FORMAT colformat=(FIXED | DYNAMIC | DEFAULT) # formatColumnConstraint
//!     | STORAGE storageval=(DISK | MEMORY | DEFAULT)      # storageColumnConstraint
//!     | referenceDefinition                               # referenceColumnConstraint
//!     | COLLATE collationName                             # collateColumnConstraint
//!     | (GENERATED ALWAYS)? AS '(' expression ')' ...     # generatedColumnConstraint
//!     | SERIAL DEFAULT VALUE                              # serialDefaultColumnConstraint
//!     | (CONSTRAINT name=uid?)? CHECK '(' expression ')'  # checkColumnConstraint
//!     ;
//! nullNotnull : NOT? (NULL_LITERAL | NULL_SPEC_LITERAL) ;
//! ```
//!
//! Clauses the model builder does not inspect carry only their spanned text.

use crate::{DataType, Node, Position, Terminal, Uid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDeclaration {
    pub uid: Uid,
    pub column_definition: ColumnDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub data_type: DataType,
    pub column_constraints: Vec<ColumnConstraint>,
}

/// The alternatives of the `columnConstraint` production
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnConstraint {
    Null(NullNotnull),
    /// The spanned text of the `defaultValue` node
    Default(Terminal),
    AutoIncrement(Terminal),
    PrimaryKey(PrimaryKeyColumnConstraint),
    UniqueKey(Terminal),
    /// The STRING_LITERAL token following COMMENT, quotes included
    Comment(Terminal),
    Format(Terminal),
    Storage(Terminal),
    Reference(Terminal),
    Collate(Terminal),
    Generated(Terminal),
    SerialDefault(Terminal),
    Check(Terminal),
}

impl Node for ColumnConstraint {
    fn start(&self) -> Position {
        match self {
            ColumnConstraint::Null(n) => n.start(),
            ColumnConstraint::PrimaryKey(p) => p.start(),
            ColumnConstraint::Default(t)
            | ColumnConstraint::AutoIncrement(t)
            | ColumnConstraint::UniqueKey(t)
            | ColumnConstraint::Comment(t)
            | ColumnConstraint::Format(t)
            | ColumnConstraint::Storage(t)
            | ColumnConstraint::Reference(t)
            | ColumnConstraint::Collate(t)
            | ColumnConstraint::Generated(t)
            | ColumnConstraint::SerialDefault(t)
            | ColumnConstraint::Check(t) => t.position,
        }
    }
}

/// `NOT? NULL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullNotnull {
    pub not: Option<Terminal>,
    pub null: Terminal,
}

impl Node for NullNotnull {
    fn start(&self) -> Position {
        self.not.as_ref().unwrap_or(&self.null).position
    }
}

/// `PRIMARY? KEY`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKeyColumnConstraint {
    pub primary: Option<Terminal>,
    pub key: Terminal,
}

impl Node for PrimaryKeyColumnConstraint {
    fn start(&self) -> Position {
        self.primary.as_ref().unwrap_or(&self.key).position
    }
}
