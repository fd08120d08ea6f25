//! Column definitions and column-level constraints

use ddlmodel_ast::ColumnKeyKind;

use super::*;

impl Visitor {
    /// Visit a `columnDefinition`: its data type and folded constraint clauses
    pub fn visit_column_definition(
        &self,
        ctx: &cst::ColumnDefinition,
    ) -> Result<ColumnDefinition, VisitError> {
        self.trace("ColumnDefinition");
        let data_type = self.visit_data_type(&ctx.data_type)?;
        let constraint = self.visit_column_constraints(&ctx.column_constraints)?;
        Ok(ColumnDefinition { data_type, constraint })
    }

    /// Fold the constraint clauses of one column, in source order, into a
    /// single `ColumnConstraint`
    ///
    /// Later clauses overwrite what earlier clauses of the same category set.
    /// Inline REFERENCES clauses are rejected; format, storage, collate,
    /// generated, serial-default and check clauses have no model fields and
    /// are skipped.
    pub fn visit_column_constraints(
        &self,
        clauses: &[cst::ColumnConstraint],
    ) -> Result<ColumnConstraint, VisitError> {
        let mut constraint = ColumnConstraint::default();
        for clause in clauses {
            match clause {
                cst::ColumnConstraint::Null(ctx) => {
                    constraint.not_null = self.visit_null_notnull(ctx);
                }
                cst::ColumnConstraint::Default(value) => {
                    constraint.has_default_value = self.visit_default_column_constraint(value);
                }
                cst::ColumnConstraint::AutoIncrement(_) => {
                    self.trace("AutoIncrementColumnConstraint");
                    constraint.auto_increment = true;
                }
                cst::ColumnConstraint::PrimaryKey(ctx) => {
                    constraint.set_key(self.visit_primary_key_column_constraint(ctx));
                }
                cst::ColumnConstraint::UniqueKey(_) => {
                    self.trace("UniqueKeyColumnConstraint");
                    constraint.unique = true;
                }
                cst::ColumnConstraint::Comment(literal) => {
                    self.trace("CommentColumnConstraint");
                    constraint.comment = normalize_string(literal.text());
                }
                cst::ColumnConstraint::Reference(clause) => {
                    self.trace("ReferenceColumnConstraint");
                    return Err(
                        self.error_at(clause.position, ErrorKind::UnsupportedColumnConstraint)
                    );
                }
                cst::ColumnConstraint::Format(_) => self.trace("FormatColumnConstraint"),
                cst::ColumnConstraint::Storage(_) => self.trace("StorageColumnConstraint"),
                cst::ColumnConstraint::Collate(_) => self.trace("CollateColumnConstraint"),
                cst::ColumnConstraint::Generated(_) => self.trace("GeneratedColumnConstraint"),
                cst::ColumnConstraint::SerialDefault(_) => {
                    self.trace("SerialDefaultColumnConstraint")
                }
                cst::ColumnConstraint::Check(_) => self.trace("CheckColumnConstraint"),
            }
        }
        Ok(constraint)
    }

    fn visit_null_notnull(&self, ctx: &cst::NullNotnull) -> bool {
        self.trace("NullColumnConstraint");
        ctx.not.is_some()
    }

    /// `DEFAULT NULL` and a default that is empty once unquoted count as no default
    fn visit_default_column_constraint(&self, value: &Terminal) -> bool {
        self.trace("DefaultColumnConstraint");
        let text = normalize_value(value.text());
        !(text.is_empty() || text.eq_ignore_ascii_case("NULL"))
    }

    fn visit_primary_key_column_constraint(
        &self,
        ctx: &cst::PrimaryKeyColumnConstraint,
    ) -> ColumnKeyKind {
        self.trace("PrimaryKeyColumnConstraint");
        match ctx.primary {
            Some(_) => ColumnKeyKind::Primary,
            None => ColumnKeyKind::Key,
        }
    }
}
