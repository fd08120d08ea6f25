//! CREATE TABLE assembly

use super::*;

/// What one entry of the create-definition list contributes to the table
enum Definition {
    Column(ColumnDeclaration),
    Constraint(TableConstraint),
}

impl Visitor {
    /// Visit a `createTable` tree and build its schema model
    ///
    /// Only the plain column-list form is modeled. Copying (`LIKE`) and
    /// query-derived (`SELECT`) forms are rejected, as is any form the grammar
    /// adds later.
    pub fn visit_create_table(&self, ctx: &cst::CreateTable) -> Result<CreateTable, VisitError> {
        self.trace("CreateTable");
        match ctx {
            cst::CreateTable::Copy(copy) => Err(self.error_at(
                copy.start,
                ErrorKind::UnsupportedStatementForm(StatementForm::Copy),
            )),
            cst::CreateTable::Query(query) => Err(self.error_at(
                query.start,
                ErrorKind::UnsupportedStatementForm(StatementForm::Query),
            )),
            cst::CreateTable::Column(column) => self.visit_column_create_table(column),
            other => Err(self.error_at(other.start(), ErrorKind::UnknownStatement)),
        }
    }

    /// Visit every tree in order, stopping at the first diagnostic
    pub fn visit_create_tables<'a, I>(&self, nodes: I) -> Result<Vec<CreateTable>, VisitError>
    where
        I: IntoIterator<Item = &'a cst::CreateTable>,
    {
        nodes.into_iter().map(|node| self.visit_create_table(node)).collect()
    }

    fn visit_column_create_table(
        &self,
        ctx: &cst::ColumnCreateTable,
    ) -> Result<CreateTable, VisitError> {
        self.trace("ColumnCreateTable");
        let mut table =
            CreateTable { name: normalize_identifier(ctx.table_name.text()), ..Default::default() };

        if let Some(definitions) = &ctx.create_definitions {
            for definition in self.visit_create_definitions(definitions)? {
                match definition {
                    Definition::Column(column) => table.columns.push(column),
                    Definition::Constraint(constraint) => table.constraints.push(constraint),
                }
            }
        }

        Ok(table)
    }

    fn visit_create_definitions(
        &self,
        ctx: &cst::CreateDefinitions,
    ) -> Result<Vec<Definition>, VisitError> {
        self.trace("CreateDefinitions");
        let mut definitions = Vec::with_capacity(ctx.definitions.len());
        for definition in &ctx.definitions {
            if let Some(d) = self.visit_create_definition(definition)? {
                definitions.push(d);
            }
        }
        Ok(definitions)
    }

    /// Entries that are neither a column nor a key constraint yield `None`
    fn visit_create_definition(
        &self,
        ctx: &cst::CreateDefinition,
    ) -> Result<Option<Definition>, VisitError> {
        match ctx {
            cst::CreateDefinition::ColumnDeclaration(column) => {
                self.trace("ColumnDeclaration");
                let name = self.visit_uid(&column.uid);
                let definition = self.visit_column_definition(&column.column_definition)?;
                Ok(Some(Definition::Column(ColumnDeclaration { name, definition })))
            }
            cst::CreateDefinition::ConstraintDeclaration(declaration) => {
                self.trace("ConstraintDeclaration");
                Ok(self
                    .visit_table_constraint(&declaration.table_constraint)?
                    .map(Definition::Constraint))
            }
            cst::CreateDefinition::IndexDeclaration(_) => {
                self.trace("IndexDeclaration");
                Ok(None)
            }
        }
    }

    pub(super) fn visit_uid(&self, uid: &cst::Uid) -> String {
        normalize_identifier(uid.text())
    }
}
