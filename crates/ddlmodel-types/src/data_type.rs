//! Resolved column data type

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeKind;

/// The data type of one column.
///
/// Size and precision arguments (`VARCHAR(255)`, `DECIMAL(10,2)`) are not part of
/// the model; only the kind and, for dimensioned numeric/temporal/binary types,
/// the `UNSIGNED` marker are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum DataType {
    /// Every type except ENUM and SET
    Normal { kind: TypeKind, unsigned: bool },
    /// ENUM or SET with its literal values in declaration order
    EnumSet { kind: TypeKind, values: Vec<String> },
}

impl DataType {
    /// Shorthand for a signed `Normal` type
    pub fn normal(kind: TypeKind) -> Self {
        DataType::Normal { kind, unsigned: false }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            DataType::Normal { kind, .. } | DataType::EnumSet { kind, .. } => *kind,
        }
    }

    /// ENUM/SET values are never numeric, so this is always false for them.
    pub fn is_unsigned(&self) -> bool {
        match self {
            DataType::Normal { unsigned, .. } => *unsigned,
            DataType::EnumSet { .. } => false,
        }
    }

    /// Literal values of an ENUM or SET, empty for every other type
    pub fn values(&self) -> &[String] {
        match self {
            DataType::Normal { .. } => &[],
            DataType::EnumSet { values, .. } => values,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Normal { kind, unsigned: true } => write!(f, "{} UNSIGNED", kind),
            DataType::Normal { kind, unsigned: false } => write!(f, "{}", kind),
            DataType::EnumSet { kind, values } => {
                let quoted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
                write!(f, "{}({})", kind, quoted.join(", "))
            }
        }
    }
}
