//! Data type resolution

use super::*;

impl Visitor {
    /// Resolve a `dataType` node to its model type
    ///
    /// Each syntactic category has its own fixed keyword table. A keyword outside
    /// the table of its category is an `InvalidDataType` diagnostic.
    pub fn visit_data_type(&self, ctx: &cst::DataType) -> Result<DataType, VisitError> {
        match ctx {
            cst::DataType::String(t) => {
                self.trace("StringDataType");
                self.lookup_type_name(&t.type_name, string_type_kind).map(DataType::normal)
            }
            cst::DataType::NationalString(t) => {
                self.trace("NationalStringDataType");
                self.lookup_type_name(&t.type_name, national_string_type_kind).map(DataType::normal)
            }
            cst::DataType::NationalVaryingString(_) => {
                self.trace("NationalVaryingStringDataType");
                Ok(DataType::normal(TypeKind::NVarChar))
            }
            cst::DataType::Dimension(t) => self.visit_dimension_data_type(t),
            cst::DataType::Simple(t) => {
                self.trace("SimpleDataType");
                self.lookup_type_name(&t.type_name, simple_type_kind).map(DataType::normal)
            }
            cst::DataType::Collection(t) => self.visit_collection_data_type(t),
            cst::DataType::Spatial(t) => {
                self.trace("SpatialDataType");
                self.lookup_type_name(&t.type_name, spatial_type_kind).map(DataType::normal)
            }
            cst::DataType::LongVarchar(_) => {
                self.trace("LongVarcharDataType");
                Ok(DataType::normal(TypeKind::LongVarChar))
            }
            cst::DataType::LongVarbinary(_) => {
                self.trace("LongVarbinaryDataType");
                Ok(DataType::normal(TypeKind::LongVarBinary))
            }
        }
    }

    /// Dimension arguments are dropped; only the kind and `UNSIGNED` are kept
    fn visit_dimension_data_type(
        &self,
        ctx: &cst::DimensionDataType,
    ) -> Result<DataType, VisitError> {
        self.trace("DimensionDataType");
        let kind = self.lookup_type_name(&ctx.type_name, dimension_type_kind)?;
        Ok(DataType::Normal { kind, unsigned: ctx.unsigned.is_some() })
    }

    fn visit_collection_data_type(
        &self,
        ctx: &cst::CollectionDataType,
    ) -> Result<DataType, VisitError> {
        self.trace("CollectionDataType");
        let kind = self.lookup_type_name(&ctx.type_name, collection_type_kind)?;
        let values = ctx
            .collection_options
            .iter()
            .flatten()
            .map(|literal| normalize_string(literal.text()))
            .collect();
        Ok(DataType::EnumSet { kind, values })
    }

    fn lookup_type_name(
        &self,
        type_name: &Terminal,
        table: fn(&str) -> Option<TypeKind>,
    ) -> Result<TypeKind, VisitError> {
        let text = normalize_type_name(type_name.text());
        match table(&text) {
            Some(kind) => Ok(kind),
            None => Err(self.error_at(type_name.position, ErrorKind::InvalidDataType(text))),
        }
    }
}

fn string_type_kind(name: &str) -> Option<TypeKind> {
    match name {
        "CHAR" => Some(TypeKind::Char),
        "CHARACTER" => Some(TypeKind::Character),
        "VARCHAR" => Some(TypeKind::VarChar),
        "TINYTEXT" => Some(TypeKind::TinyText),
        "TEXT" => Some(TypeKind::Text),
        "MEDIUMTEXT" => Some(TypeKind::MediumText),
        "LONGTEXT" => Some(TypeKind::LongText),
        "NCHAR" => Some(TypeKind::NChar),
        "NVARCHAR" => Some(TypeKind::NVarChar),
        "LONG" => Some(TypeKind::LongVarChar),
        _ => None,
    }
}

fn national_string_type_kind(name: &str) -> Option<TypeKind> {
    match name {
        "VARCHAR" => Some(TypeKind::NVarChar),
        "CHARACTER" => Some(TypeKind::NChar),
        _ => None,
    }
}

fn dimension_type_kind(name: &str) -> Option<TypeKind> {
    match name {
        "BIT" => Some(TypeKind::Bit),
        "TIME" => Some(TypeKind::Time),
        "TIMESTAMP" => Some(TypeKind::Timestamp),
        "DATETIME" => Some(TypeKind::DateTime),
        "BINARY" => Some(TypeKind::Binary),
        "VARBINARY" => Some(TypeKind::VarBinary),
        "BLOB" => Some(TypeKind::Blob),
        "YEAR" => Some(TypeKind::Year),
        "DECIMAL" => Some(TypeKind::Decimal),
        "DEC" => Some(TypeKind::Dec),
        "FIXED" => Some(TypeKind::Fixed),
        "NUMERIC" => Some(TypeKind::Numeric),
        "FLOAT" => Some(TypeKind::Float),
        "FLOAT4" => Some(TypeKind::Float4),
        "FLOAT8" => Some(TypeKind::Float8),
        "DOUBLE" => Some(TypeKind::Double),
        "REAL" => Some(TypeKind::Real),
        "TINYINT" => Some(TypeKind::TinyInt),
        "SMALLINT" => Some(TypeKind::SmallInt),
        "MEDIUMINT" => Some(TypeKind::MediumInt),
        "INT" => Some(TypeKind::Int),
        "INTEGER" => Some(TypeKind::Integer),
        "BIGINT" => Some(TypeKind::BigInt),
        "MIDDLEINT" => Some(TypeKind::MiddleInt),
        "INT1" => Some(TypeKind::Int1),
        "INT2" => Some(TypeKind::Int2),
        "INT3" => Some(TypeKind::Int3),
        "INT4" => Some(TypeKind::Int4),
        "INT8" => Some(TypeKind::Int8),
        _ => None,
    }
}

fn simple_type_kind(name: &str) -> Option<TypeKind> {
    match name {
        "DATE" => Some(TypeKind::Date),
        "TINYBLOB" => Some(TypeKind::TinyBlob),
        "MEDIUMBLOB" => Some(TypeKind::MediumBlob),
        "LONGBLOB" => Some(TypeKind::LongBlob),
        "BOOL" => Some(TypeKind::Bool),
        "BOOLEAN" => Some(TypeKind::Boolean),
        "SERIAL" => Some(TypeKind::Serial),
        _ => None,
    }
}

fn collection_type_kind(name: &str) -> Option<TypeKind> {
    match name {
        "ENUM" => Some(TypeKind::Enum),
        "SET" => Some(TypeKind::Set),
        _ => None,
    }
}

fn spatial_type_kind(name: &str) -> Option<TypeKind> {
    match name {
        "GEOMETRYCOLLECTION" => Some(TypeKind::GeometryCollection),
        "GEOMCOLLECTION" => Some(TypeKind::GeomCollection),
        "LINESTRING" => Some(TypeKind::LineString),
        "MULTILINESTRING" => Some(TypeKind::MultiLineString),
        "MULTIPOINT" => Some(TypeKind::MultiPoint),
        "MULTIPOLYGON" => Some(TypeKind::MultiPolygon),
        "POINT" => Some(TypeKind::Point),
        "POLYGON" => Some(TypeKind::Polygon),
        "JSON" => Some(TypeKind::Json),
        "GEOMETRY" => Some(TypeKind::Geometry),
        _ => None,
    }
}
