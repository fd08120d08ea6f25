//! Type kind definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every column type keyword the schema model recognizes.
///
/// Aliases are kept distinct (`INT` vs `INTEGER`, `BOOL` vs `BOOLEAN`, ...) so
/// that generated code and schema diffs can reproduce the declared spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    // Long forms (LONG VARCHAR, LONG VARBINARY)
    LongVarBinary,
    LongVarChar,

    // Spatial types
    GeometryCollection,
    GeomCollection,
    LineString,
    MultiLineString,
    MultiPoint,
    MultiPolygon,
    Point,
    Polygon,
    Geometry,

    Json,

    // Collections
    Enum,
    Set,

    // Dimensioned types
    Bit,
    Time,
    Timestamp,
    DateTime,
    Binary,
    VarBinary,
    Blob,
    Year,
    Decimal,
    Dec,
    Fixed,
    Numeric,
    Float,
    Float4,
    Float8,
    Double,
    Real,
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    MiddleInt,
    Int1,
    Int2,
    Int3,
    Int4,
    Int8,

    // Simple types
    Date,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Bool,
    Boolean,
    Serial,

    // Character strings
    NVarChar,
    NChar,
    Char,
    Character,
    VarChar,
    TinyText,
    Text,
    MediumText,
    LongText,
}

/// Coarse grouping of type kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeFamily {
    Numeric,
    Boolean,
    Temporal,
    String,
    Binary,
    Spatial,
    Json,
    Collection,
}

impl TypeKind {
    /// Canonical upper-case SQL spelling of the type keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::LongVarBinary => "LONG VARBINARY",
            TypeKind::LongVarChar => "LONG VARCHAR",
            TypeKind::GeometryCollection => "GEOMETRYCOLLECTION",
            TypeKind::GeomCollection => "GEOMCOLLECTION",
            TypeKind::LineString => "LINESTRING",
            TypeKind::MultiLineString => "MULTILINESTRING",
            TypeKind::MultiPoint => "MULTIPOINT",
            TypeKind::MultiPolygon => "MULTIPOLYGON",
            TypeKind::Point => "POINT",
            TypeKind::Polygon => "POLYGON",
            TypeKind::Geometry => "GEOMETRY",
            TypeKind::Json => "JSON",
            TypeKind::Enum => "ENUM",
            TypeKind::Set => "SET",
            TypeKind::Bit => "BIT",
            TypeKind::Time => "TIME",
            TypeKind::Timestamp => "TIMESTAMP",
            TypeKind::DateTime => "DATETIME",
            TypeKind::Binary => "BINARY",
            TypeKind::VarBinary => "VARBINARY",
            TypeKind::Blob => "BLOB",
            TypeKind::Year => "YEAR",
            TypeKind::Decimal => "DECIMAL",
            TypeKind::Dec => "DEC",
            TypeKind::Fixed => "FIXED",
            TypeKind::Numeric => "NUMERIC",
            TypeKind::Float => "FLOAT",
            TypeKind::Float4 => "FLOAT4",
            TypeKind::Float8 => "FLOAT8",
            TypeKind::Double => "DOUBLE",
            TypeKind::Real => "REAL",
            TypeKind::TinyInt => "TINYINT",
            TypeKind::SmallInt => "SMALLINT",
            TypeKind::MediumInt => "MEDIUMINT",
            TypeKind::Int => "INT",
            TypeKind::Integer => "INTEGER",
            TypeKind::BigInt => "BIGINT",
            TypeKind::MiddleInt => "MIDDLEINT",
            TypeKind::Int1 => "INT1",
            TypeKind::Int2 => "INT2",
            TypeKind::Int3 => "INT3",
            TypeKind::Int4 => "INT4",
            TypeKind::Int8 => "INT8",
            TypeKind::Date => "DATE",
            TypeKind::TinyBlob => "TINYBLOB",
            TypeKind::MediumBlob => "MEDIUMBLOB",
            TypeKind::LongBlob => "LONGBLOB",
            TypeKind::Bool => "BOOL",
            TypeKind::Boolean => "BOOLEAN",
            TypeKind::Serial => "SERIAL",
            TypeKind::NVarChar => "NVARCHAR",
            TypeKind::NChar => "NCHAR",
            TypeKind::Char => "CHAR",
            TypeKind::Character => "CHARACTER",
            TypeKind::VarChar => "VARCHAR",
            TypeKind::TinyText => "TINYTEXT",
            TypeKind::Text => "TEXT",
            TypeKind::MediumText => "MEDIUMTEXT",
            TypeKind::LongText => "LONGTEXT",
        }
    }

    /// Returns the family this kind belongs to
    ///
    /// BIT is grouped with the binary types since its values are bit strings.
    /// SERIAL is an alias for an unsigned auto-increment BIGINT and is numeric.
    pub fn family(&self) -> TypeFamily {
        match self {
            TypeKind::Decimal
            | TypeKind::Dec
            | TypeKind::Fixed
            | TypeKind::Numeric
            | TypeKind::Float
            | TypeKind::Float4
            | TypeKind::Float8
            | TypeKind::Double
            | TypeKind::Real
            | TypeKind::TinyInt
            | TypeKind::SmallInt
            | TypeKind::MediumInt
            | TypeKind::Int
            | TypeKind::Integer
            | TypeKind::BigInt
            | TypeKind::MiddleInt
            | TypeKind::Int1
            | TypeKind::Int2
            | TypeKind::Int3
            | TypeKind::Int4
            | TypeKind::Int8
            | TypeKind::Serial => TypeFamily::Numeric,

            TypeKind::Bool | TypeKind::Boolean => TypeFamily::Boolean,

            TypeKind::Date
            | TypeKind::Time
            | TypeKind::Timestamp
            | TypeKind::DateTime
            | TypeKind::Year => TypeFamily::Temporal,

            TypeKind::LongVarChar
            | TypeKind::NVarChar
            | TypeKind::NChar
            | TypeKind::Char
            | TypeKind::Character
            | TypeKind::VarChar
            | TypeKind::TinyText
            | TypeKind::Text
            | TypeKind::MediumText
            | TypeKind::LongText => TypeFamily::String,

            TypeKind::LongVarBinary
            | TypeKind::Bit
            | TypeKind::Binary
            | TypeKind::VarBinary
            | TypeKind::Blob
            | TypeKind::TinyBlob
            | TypeKind::MediumBlob
            | TypeKind::LongBlob => TypeFamily::Binary,

            TypeKind::GeometryCollection
            | TypeKind::GeomCollection
            | TypeKind::LineString
            | TypeKind::MultiLineString
            | TypeKind::MultiPoint
            | TypeKind::MultiPolygon
            | TypeKind::Point
            | TypeKind::Polygon
            | TypeKind::Geometry => TypeFamily::Spatial,

            TypeKind::Json => TypeFamily::Json,

            TypeKind::Enum | TypeKind::Set => TypeFamily::Collection,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
