use ddlmodel_ast::*;
use ddlmodel_types::{DataType, TypeKind};
use pretty_assertions::assert_eq;

fn column(name: &str, kind: TypeKind, constraint: ColumnConstraint) -> ColumnDeclaration {
    ColumnDeclaration {
        name: name.to_string(),
        definition: ColumnDefinition { data_type: DataType::normal(kind), constraint },
    }
}

fn users_table() -> CreateTable {
    CreateTable {
        name: "user".to_string(),
        columns: vec![
            column(
                "id",
                TypeKind::BigInt,
                ColumnConstraint { not_null: true, auto_increment: true, ..Default::default() },
            ),
            column(
                "email",
                TypeKind::VarChar,
                ColumnConstraint { not_null: true, unique: true, ..Default::default() },
            ),
            column("nickname", TypeKind::VarChar, ColumnConstraint::default()),
        ],
        constraints: vec![
            TableConstraint::primary_key(vec!["id".to_string()]),
            TableConstraint::unique_key(vec!["nickname".to_string(), "email".to_string()]),
        ],
    }
}

// ============================================================================
// Lookups
// ============================================================================

#[test]
fn test_column_lookup() {
    let table = users_table();
    let email = table.column("email").expect("email column");
    assert_eq!(email.data_type().kind(), TypeKind::VarChar);
    assert!(!email.is_nullable());
    assert!(table.column("nickname").unwrap().is_nullable());
    assert!(table.column("missing").is_none());
}

#[test]
fn test_primary_key_prefers_table_constraint() {
    let mut table = users_table();
    table.columns[2].definition.constraint.set_key(ColumnKeyKind::Primary);
    assert_eq!(table.primary_key(), vec!["id"]);
}

#[test]
fn test_primary_key_falls_back_to_column_flags() {
    let mut table = users_table();
    table.constraints.clear();
    table.columns[0].definition.constraint.set_key(ColumnKeyKind::Primary);
    assert_eq!(table.primary_key(), vec!["id"]);

    table.columns[0].definition.constraint.primary = false;
    assert!(table.primary_key().is_empty());
}

#[test]
fn test_unique_keys() {
    let table = users_table();
    assert_eq!(table.unique_keys(), vec![vec!["nickname", "email"], vec!["email"]]);
}

// ============================================================================
// Constraints
// ============================================================================

#[test]
fn test_set_key_sets_exactly_one_flag() {
    let mut primary = ColumnConstraint::default();
    primary.set_key(ColumnKeyKind::Primary);
    assert!(primary.primary);
    assert!(!primary.key);

    let mut key = ColumnConstraint::default();
    key.set_key(ColumnKeyKind::Key);
    assert!(key.key);
    assert!(!key.primary);
}

#[test]
fn test_set_key_accumulates_across_clauses() {
    let mut constraint = ColumnConstraint::default();
    constraint.set_key(ColumnKeyKind::Key);
    constraint.set_key(ColumnKeyKind::Primary);
    assert!(constraint.key);
    assert!(constraint.primary);
}

#[test]
fn test_table_constraint_constructors() {
    let pk = TableConstraint::primary_key(vec!["a".to_string(), "b".to_string()]);
    assert!(pk.is_primary_key());
    assert!(pk.unique_key_columns.is_empty());

    let uk = TableConstraint::unique_key(vec!["c".to_string()]);
    assert!(!uk.is_primary_key());
    assert_eq!(uk.unique_key_columns, vec!["c".to_string()]);
}

#[test]
fn test_model_serializes_to_json() {
    let table = users_table();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["name"], "user");
    assert_eq!(json["columns"][0]["definition"]["data_type"]["kind"], "BigInt");
    assert_eq!(json["columns"][0]["definition"]["constraint"]["auto_increment"], true);
    assert_eq!(json["constraints"][1]["unique_key_columns"][1], "email");

    let back: CreateTable = serde_json::from_value(json).unwrap();
    assert_eq!(back, table);
}
