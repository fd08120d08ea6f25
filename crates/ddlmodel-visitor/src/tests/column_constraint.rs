use ddlmodel_ast::ColumnConstraint;
use pretty_assertions::assert_eq;

use super::*;
use crate::{ErrorKind, Visitor};

fn aggregate(clauses: Vec<cst::ColumnConstraint>) -> ColumnConstraint {
    Visitor::new().visit_column_constraints(&clauses).expect("clauses should fold")
}

#[test]
fn test_no_clauses() {
    assert_eq!(aggregate(vec![]), ColumnConstraint::default());
}

#[test]
fn test_null_constraints() {
    assert!(aggregate(vec![not_null()]).not_null);
    assert!(!aggregate(vec![null()]).not_null);
    // The last nullability clause wins
    assert!(!aggregate(vec![not_null(), null()]).not_null);
}

#[test]
fn test_default_value() {
    assert!(aggregate(vec![default_value("0")]).has_default_value);
    assert!(aggregate(vec![default_value("'guest'")]).has_default_value);
    assert!(aggregate(vec![default_value("CURRENT_TIMESTAMP")]).has_default_value);
}

#[test]
fn test_null_or_empty_default_is_no_default() {
    for text in ["NULL", "null", "''", "``", "'\r\n'"] {
        assert!(!aggregate(vec![default_value(text)]).has_default_value, "DEFAULT {}", text);
    }
    // Quoted 'NULL' is indistinguishable once normalized
    assert!(!aggregate(vec![default_value("'NULL'")]).has_default_value);
}

#[test]
fn test_double_quoted_default_is_kept() {
    // DEFAULT "" keeps its quotes and so is a real default
    assert!(aggregate(vec![default_value("\"\"")]).has_default_value);
    assert!(aggregate(vec![default_value("\"NULL\"")]).has_default_value);
}

#[test]
fn test_auto_increment_and_unique() {
    let constraint = aggregate(vec![
        cst::ColumnConstraint::AutoIncrement(t("AUTO_INCREMENT")),
        cst::ColumnConstraint::UniqueKey(t("UNIQUE KEY")),
    ]);
    assert!(constraint.auto_increment);
    assert!(constraint.unique);
    assert!(!constraint.primary);
}

#[test]
fn test_primary_key_clause_sets_primary_only() {
    let constraint = aggregate(vec![primary_key()]);
    assert!(constraint.primary);
    assert!(!constraint.key);
}

#[test]
fn test_key_and_primary_key_clauses_both_set() {
    // c INT KEY PRIMARY KEY
    let constraint = aggregate(vec![bare_key(), primary_key()]);
    assert!(constraint.key);
    assert!(constraint.primary);
}

#[test]
fn test_bare_key_clause_sets_key_only() {
    let constraint = aggregate(vec![bare_key()]);
    assert!(constraint.key);
    assert!(!constraint.primary);
}

#[test]
fn test_comment_is_unquoted() {
    assert_eq!(aggregate(vec![comment("'学号'")]).comment, "学号");
    assert_eq!(aggregate(vec![comment("\"user\nname\"")]).comment, "username");
}

#[test]
fn test_untracked_clauses_are_ignored() {
    let constraint = aggregate(vec![
        not_null(),
        cst::ColumnConstraint::Format(t("COLUMN_FORMAT FIXED")),
        cst::ColumnConstraint::Storage(t("STORAGE DISK")),
        cst::ColumnConstraint::Collate(t("COLLATE utf8mb4_bin")),
        cst::ColumnConstraint::Generated(t("GENERATED ALWAYS AS (a + 1) STORED")),
        cst::ColumnConstraint::SerialDefault(t("SERIAL DEFAULT VALUE")),
        cst::ColumnConstraint::Check(t("CHECK (a > 0)")),
    ]);
    assert_eq!(constraint, ColumnConstraint { not_null: true, ..Default::default() });
}

#[test]
fn test_reference_clause_is_rejected() {
    let clauses = vec![
        not_null(),
        cst::ColumnConstraint::Reference(tok("REFERENCES users(id)", 2, 30)),
        comment("'never reached'"),
    ];
    let err = Visitor::new().visit_column_constraints(&clauses).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedColumnConstraint);
    assert_eq!(err.position, Position::new(2, 30));
    assert_eq!(err.to_string(), "2:30 Unsupported reference definition");
}

#[test]
fn test_full_column_clause_list() {
    // `number` varchar(255) NOT NULL DEFAULT '' COMMENT '学号'
    let constraint =
        aggregate(vec![not_null(), default_value("''"), comment("'学号'")]);
    assert_eq!(
        constraint,
        ColumnConstraint {
            not_null: true,
            has_default_value: false,
            comment: "学号".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_column_definition_combines_type_and_constraints() {
    let definition = cst::ColumnDefinition {
        data_type: unsigned_type("INT"),
        column_constraints: vec![not_null(), cst::ColumnConstraint::AutoIncrement(t("AUTO_INCREMENT"))],
    };
    let model = Visitor::new().visit_column_definition(&definition).unwrap();
    assert!(model.data_type.is_unsigned());
    assert!(model.constraint.not_null);
    assert!(model.constraint.auto_increment);
}

#[test]
fn test_column_definition_with_invalid_type_fails_before_constraints() {
    let definition = cst::ColumnDefinition {
        data_type: dimension_type("VARCHAR"),
        column_constraints: vec![cst::ColumnConstraint::Reference(t("REFERENCES t(a)"))],
    };
    let err = Visitor::new().visit_column_definition(&definition).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidDataType("VARCHAR".to_string()));
}
