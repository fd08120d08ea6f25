//! Table-level constraints

use super::*;

impl Visitor {
    /// Extract the column list of a PRIMARY KEY or UNIQUE table constraint
    ///
    /// FOREIGN KEY constraints are rejected. CHECK constraints have no model
    /// representation and yield `None`.
    pub fn visit_table_constraint(
        &self,
        ctx: &cst::TableConstraint,
    ) -> Result<Option<TableConstraint>, VisitError> {
        match ctx {
            cst::TableConstraint::PrimaryKey(pk) => {
                self.trace("PrimaryKeyTableConstraint");
                let columns = self.visit_index_column_names(&pk.index_column_names);
                Ok(Some(TableConstraint::primary_key(columns)))
            }
            cst::TableConstraint::UniqueKey(uk) => {
                self.trace("UniqueKeyTableConstraint");
                let columns = self.visit_index_column_names(&uk.index_column_names);
                Ok(Some(TableConstraint::unique_key(columns)))
            }
            cst::TableConstraint::ForeignKey(fk) => {
                self.trace("ForeignKeyTableConstraint");
                Err(self.error_at(fk.start, ErrorKind::UnsupportedTableConstraint))
            }
            cst::TableConstraint::Check(_) => {
                self.trace("CheckTableConstraint");
                Ok(None)
            }
        }
    }

    /// Column names of a key definition, in declaration order
    pub fn visit_index_column_names(&self, ctx: &cst::IndexColumnNames) -> Vec<String> {
        self.trace("IndexColumnNames");
        ctx.names.iter().map(|name| self.visit_index_column_name(name)).collect()
    }

    fn visit_index_column_name(&self, ctx: &cst::IndexColumnName) -> String {
        self.trace("IndexColumnName");
        match ctx {
            cst::IndexColumnName::Uid(uid) => self.visit_uid(uid),
            cst::IndexColumnName::StringLiteral(literal) => normalize_value(literal.text()),
        }
    }
}
