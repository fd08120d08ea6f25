//! Semantic model builder for MySQL CREATE TABLE.
//!
//! Walks a concrete syntax tree produced by an external grammar-driven parser
//! and builds the typed schema model of `ddlmodel-ast`. The first unsupported
//! construct aborts the whole visit with a positioned [`VisitError`].

mod config;
mod error;
pub mod normalize;
#[cfg(test)]
mod tests;
mod visitor;

pub use config::{VisitorConfig, DEBUG_ENV, SOURCE_PREFIX_ENV};
pub use error::{ErrorKind, StatementForm, VisitError};
pub use visitor::Visitor;

/// Build the model of one CREATE TABLE tree with a default visitor
pub fn assemble(node: &ddlmodel_cst::CreateTable) -> Result<ddlmodel_ast::CreateTable, VisitError> {
    Visitor::new().visit_create_table(node)
}
