//! ddlmodel - typed schema model for MySQL CREATE TABLE
//!
//! This is the root crate that re-exports all components:
//!
//! - [`cst`]: the syntax tree an external MySQL grammar produces
//! - [`types`]: column data type categories
//! - [`ast`]: the schema model (tables, columns, constraints)
//! - [`visitor`]: the walk that turns the former into the latter

pub use ddlmodel_ast as ast;
pub use ddlmodel_cst as cst;
pub use ddlmodel_types as types;
pub use ddlmodel_visitor as visitor;

pub use ddlmodel_visitor::{assemble, VisitError, Visitor, VisitorConfig};
