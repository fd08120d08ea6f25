//! Schema model for MySQL CREATE TABLE
//!
//! This crate defines the normalized, owned description of one table that the
//! visitor builds from a syntax tree. It holds no references into the tree and
//! is never mutated after construction.

mod constraint;
mod table;

pub use constraint::{ColumnConstraint, ColumnKeyKind, TableConstraint};
pub use table::{ColumnDeclaration, ColumnDefinition, CreateTable};
