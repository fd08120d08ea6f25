//! CREATE TABLE model

use ddlmodel_types::DataType;
use serde::{Deserialize, Serialize};

use crate::{ColumnConstraint, TableConstraint};

/// A fully resolved CREATE TABLE statement
///
/// `columns` and `constraints` each keep declaration order; the interleaving of
/// columns and constraints in the source is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateTable {
    /// Table name with enclosing quotes and line breaks removed
    ///
    /// Never empty for a tree the grammar accepts. It is not checked here, so a
    /// hand-built tree named `` `` `` yields an empty name.
    pub name: String,
    pub columns: Vec<ColumnDeclaration>,
    pub constraints: Vec<TableConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDeclaration {
    pub name: String,
    pub definition: ColumnDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub data_type: DataType,
    pub constraint: ColumnConstraint,
}

impl CreateTable {
    /// Looks up a column by its normalized name (exact match)
    pub fn column(&self, name: &str) -> Option<&ColumnDeclaration> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns of the primary key
    ///
    /// A table-level PRIMARY KEY declaration wins; without one, the columns
    /// declared with a column-level PRIMARY KEY are returned in column order.
    pub fn primary_key(&self) -> Vec<&str> {
        if let Some(pk) = self.constraints.iter().find(|c| c.is_primary_key()) {
            return pk.primary_key_columns.iter().map(String::as_str).collect();
        }

        self.columns
            .iter()
            .filter(|c| c.definition.constraint.primary)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Column lists of every unique key: table-level declarations first, then
    /// one single-column list per column declared UNIQUE.
    pub fn unique_keys(&self) -> Vec<Vec<&str>> {
        let table_level = self
            .constraints
            .iter()
            .filter(|c| !c.unique_key_columns.is_empty())
            .map(|c| c.unique_key_columns.iter().map(String::as_str).collect());

        let column_level = self
            .columns
            .iter()
            .filter(|c| c.definition.constraint.unique)
            .map(|c| vec![c.name.as_str()]);

        table_level.chain(column_level).collect()
    }
}

impl ColumnDeclaration {
    pub fn data_type(&self) -> &DataType {
        &self.definition.data_type
    }

    pub fn constraint(&self) -> &ColumnConstraint {
        &self.definition.constraint
    }

    pub fn is_nullable(&self) -> bool {
        !self.definition.constraint.not_null
    }
}
