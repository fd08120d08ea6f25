//! Concrete Syntax Tree for MySQL CREATE TABLE
//!
//! This crate defines the node-typed tree a grammar-driven parser hands to the
//! schema model builder. There is one Rust type per grammar production, and
//! every alternative of a production is one enum variant, so consumers can match
//! exhaustively.
//!
//! Nodes only carry what a consumer reads: the start position of the node and,
//! for text-bearing nodes, the literal source text the node spans. No lexing or
//! parsing happens here.

mod column;
mod constraint;
mod create_table;
mod data_type;
mod position;

pub use column::{ColumnConstraint, ColumnDeclaration, ColumnDefinition, NullNotnull, PrimaryKeyColumnConstraint};
pub use constraint::{
    ForeignKeyTableConstraint, IndexColumnName, IndexColumnNames, PrimaryKeyTableConstraint,
    TableConstraint, UniqueKeyTableConstraint,
};
pub use create_table::{
    ColumnCreateTable, ConstraintDeclaration, CopyCreateTable, CreateDefinition, CreateDefinitions,
    CreateTable, IndexDeclaration, QueryCreateTable, TableName, Uid,
};
pub use data_type::{
    CollectionDataType, DataType, DimensionDataType, NationalStringDataType,
    NationalVaryingStringDataType, TypeNameDataType,
};
pub use position::{Node, Position, Terminal};
