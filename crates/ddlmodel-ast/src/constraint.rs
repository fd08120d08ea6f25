//! Column and table constraints

use serde::{Deserialize, Serialize};

/// Outcome of a `PRIMARY? KEY` column clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKeyKind {
    /// PRIMARY KEY
    Primary,
    /// Bare KEY
    Key,
}

/// All constraint clauses of one column folded into flags
///
/// `has_default_value` is false both for a missing DEFAULT and for `DEFAULT NULL`
/// or a default whose text is empty once quotes are removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnConstraint {
    pub not_null: bool,
    pub has_default_value: bool,
    pub auto_increment: bool,
    pub primary: bool,
    pub key: bool,
    pub unique: bool,
    pub comment: String,
}

impl ColumnConstraint {
    /// Records one key clause by setting the flag of its kind
    ///
    /// Each clause sets exactly one flag and never clears the other, so a column
    /// with both a `KEY` and a `PRIMARY KEY` clause has both set.
    pub fn set_key(&mut self, kind: ColumnKeyKind) {
        match kind {
            ColumnKeyKind::Primary => self.primary = true,
            ColumnKeyKind::Key => self.key = true,
        }
    }
}

/// One table-level key declaration
///
/// Exactly one of the two lists is populated, depending on whether the
/// declaration was a PRIMARY KEY or a UNIQUE key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableConstraint {
    pub primary_key_columns: Vec<String>,
    pub unique_key_columns: Vec<String>,
}

impl TableConstraint {
    pub fn primary_key(columns: Vec<String>) -> Self {
        TableConstraint { primary_key_columns: columns, unique_key_columns: Vec::new() }
    }

    pub fn unique_key(columns: Vec<String>) -> Self {
        TableConstraint { primary_key_columns: Vec::new(), unique_key_columns: columns }
    }

    pub fn is_primary_key(&self) -> bool {
        !self.primary_key_columns.is_empty()
    }
}
