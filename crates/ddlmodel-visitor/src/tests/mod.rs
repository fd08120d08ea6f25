//! Visitor tests
//!
//! Trees are built by hand with the helpers below, positioned as a parser would
//! report them for the SQL quoted in each test.

mod column_constraint;

use ddlmodel_cst::{self as cst, Position, Terminal};

pub(crate) fn tok(text: &str, line: usize, column: usize) -> Terminal {
    Terminal::new(text, Position::new(line, column))
}

/// Token at 1:0, for tests that do not look at positions
pub(crate) fn t(text: &str) -> Terminal {
    tok(text, 1, 0)
}

pub(crate) fn uid(text: &str) -> cst::Uid {
    cst::Uid(t(text))
}

pub(crate) fn string_type(name: &str) -> cst::DataType {
    cst::DataType::String(cst::TypeNameDataType::new(t(name)))
}

pub(crate) fn simple_type(name: &str) -> cst::DataType {
    cst::DataType::Simple(cst::TypeNameDataType::new(t(name)))
}

pub(crate) fn spatial_type(name: &str) -> cst::DataType {
    cst::DataType::Spatial(cst::TypeNameDataType::new(t(name)))
}

pub(crate) fn dimension_type(name: &str) -> cst::DataType {
    cst::DataType::Dimension(cst::DimensionDataType::new(t(name)))
}

pub(crate) fn unsigned_type(name: &str) -> cst::DataType {
    cst::DataType::Dimension(cst::DimensionDataType {
        type_name: t(name),
        dimension: None,
        unsigned: Some(t("UNSIGNED")),
    })
}

pub(crate) fn collection_type(name: &str, values: &[&str]) -> cst::DataType {
    cst::DataType::Collection(cst::CollectionDataType {
        type_name: t(name),
        collection_options: Some(values.iter().map(|v| t(v)).collect()),
    })
}

pub(crate) fn not_null() -> cst::ColumnConstraint {
    cst::ColumnConstraint::Null(cst::NullNotnull { not: Some(t("NOT")), null: t("NULL") })
}

pub(crate) fn null() -> cst::ColumnConstraint {
    cst::ColumnConstraint::Null(cst::NullNotnull { not: None, null: t("NULL") })
}

pub(crate) fn default_value(text: &str) -> cst::ColumnConstraint {
    cst::ColumnConstraint::Default(t(text))
}

pub(crate) fn primary_key() -> cst::ColumnConstraint {
    cst::ColumnConstraint::PrimaryKey(cst::PrimaryKeyColumnConstraint {
        primary: Some(t("PRIMARY")),
        key: t("KEY"),
    })
}

pub(crate) fn bare_key() -> cst::ColumnConstraint {
    cst::ColumnConstraint::PrimaryKey(cst::PrimaryKeyColumnConstraint { primary: None, key: t("KEY") })
}

pub(crate) fn comment(literal: &str) -> cst::ColumnConstraint {
    cst::ColumnConstraint::Comment(t(literal))
}

pub(crate) fn column(
    name: &str,
    data_type: cst::DataType,
    column_constraints: Vec<cst::ColumnConstraint>,
) -> cst::CreateDefinition {
    cst::CreateDefinition::ColumnDeclaration(cst::ColumnDeclaration {
        uid: uid(name),
        column_definition: cst::ColumnDefinition { data_type, column_constraints },
    })
}

pub(crate) fn index_columns(names: &[&str]) -> cst::IndexColumnNames {
    cst::IndexColumnNames::new(names.iter().map(|n| cst::IndexColumnName::Uid(uid(n))).collect())
}

pub(crate) fn primary_key_declaration(names: &[&str]) -> cst::CreateDefinition {
    cst::CreateDefinition::ConstraintDeclaration(cst::ConstraintDeclaration {
        table_constraint: cst::TableConstraint::PrimaryKey(cst::PrimaryKeyTableConstraint {
            start: Position::new(1, 0),
            name: None,
            index_column_names: index_columns(names),
        }),
    })
}

pub(crate) fn unique_key_declaration(index_name: &str, names: &[&str]) -> cst::CreateDefinition {
    cst::CreateDefinition::ConstraintDeclaration(cst::ConstraintDeclaration {
        table_constraint: cst::TableConstraint::UniqueKey(cst::UniqueKeyTableConstraint {
            start: Position::new(1, 0),
            name: None,
            index_name: Some(uid(index_name)),
            index_column_names: index_columns(names),
        }),
    })
}

pub(crate) fn create_table(name: &str, definitions: Vec<cst::CreateDefinition>) -> cst::CreateTable {
    cst::CreateTable::Column(cst::ColumnCreateTable::new(
        Position::new(1, 0),
        cst::TableName(tok(name, 1, 13)),
        definitions,
    ))
}
