//! Column data types for the ddlmodel schema model
//!
//! This crate provides:
//! - `TypeKind`, the closed set of MySQL-family column types the model recognizes
//! - `TypeFamily`, a coarse grouping of kinds for downstream code generators
//! - `DataType`, the resolved type of one column (plain kind or ENUM/SET with values)

mod data_type;
mod type_kind;

pub use data_type::DataType;
pub use type_kind::{TypeFamily, TypeKind};
