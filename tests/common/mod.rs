//! Syntax tree builders shared by the end-to-end tests
//!
//! Each builder positions tokens on a single line, in the order a parser would
//! report them for the SQL quoted in the calling test.

#![allow(dead_code)]

use ddlmodel::cst::{self, Position, Terminal};

/// Lays out tokens left to right on line 1, one column per character plus a space
pub struct Line {
    column: usize,
}

impl Line {
    pub fn new() -> Self {
        Line { column: 0 }
    }

    pub fn token(&mut self, text: &str) -> Terminal {
        let terminal = Terminal::new(text, Position::new(1, self.column));
        self.column += text.chars().count() + 1;
        terminal
    }

    pub fn position(&self) -> Position {
        Position::new(1, self.column)
    }
}

pub fn column(
    line: &mut Line,
    name: &str,
    data_type: cst::DataType,
    column_constraints: Vec<cst::ColumnConstraint>,
) -> cst::CreateDefinition {
    cst::CreateDefinition::ColumnDeclaration(cst::ColumnDeclaration {
        uid: cst::Uid(line.token(name)),
        column_definition: cst::ColumnDefinition { data_type, column_constraints },
    })
}

pub fn not_null(line: &mut Line) -> cst::ColumnConstraint {
    let not = line.token("NOT");
    cst::ColumnConstraint::Null(cst::NullNotnull { not: Some(not), null: line.token("NULL") })
}

pub fn primary_key(line: &mut Line, names: &[&str]) -> cst::CreateDefinition {
    let start = line.position();
    line.token("PRIMARY");
    line.token("KEY");
    let names = names
        .iter()
        .map(|name| cst::IndexColumnName::Uid(cst::Uid(line.token(name))))
        .collect();
    cst::CreateDefinition::ConstraintDeclaration(cst::ConstraintDeclaration {
        table_constraint: cst::TableConstraint::PrimaryKey(cst::PrimaryKeyTableConstraint {
            start,
            name: None,
            index_column_names: cst::IndexColumnNames::new(names),
        }),
    })
}

/// `CREATE TABLE <name> (<definitions>)`, laid out by `build` after the name
pub fn create_table(
    line: &mut Line,
    name: &str,
    build: impl FnOnce(&mut Line) -> Vec<cst::CreateDefinition>,
) -> cst::CreateTable {
    let start = line.position();
    line.token("CREATE");
    line.token("TABLE");
    let table_name = cst::TableName(line.token(name));
    line.token("(");
    let definitions = build(line);
    cst::CreateTable::Column(cst::ColumnCreateTable::new(start, table_name, definitions))
}
