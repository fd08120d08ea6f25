//! Data type productions
//!
//! ```text
//! dataType
//!     : typeName=(CHAR | VARCHAR | TEXT | ...) lengthOneDimension? ...   # stringDataType
//!     | NATIONAL typeName=(VARCHAR | CHARACTER) lengthOneDimension? ...  # nationalStringDataType
//!     | NCHAR typeName=VARCHAR lengthOneDimension? ...                   # nationalVaryingStringDataType
//!     | typeName=(INT | DECIMAL | TIMESTAMP | ...) dimension? UNSIGNED?  # dimensionDataType
//!     | typeName=(DATE | TINYBLOB | BOOL | SERIAL | ...)                 # simpleDataType
//!     | typeName=(ENUM | SET) collectionOptions ...                      # collectionDataType
//!     | typeName=(GEOMETRY | POINT | JSON | ...)                         # spatialDataType
//!     | typeName=LONG VARCHAR? ...                                       # longVarcharDataType
//!     | LONG VARBINARY                                                   # longVarbinaryDataType
//!     ;
//! collectionOptions : '(' STRING_LITERAL (',' STRING_LITERAL)* ')' ;
//! ```

use crate::{Node, Position, Terminal};

/// The alternatives of the `dataType` production
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    String(TypeNameDataType),
    NationalString(NationalStringDataType),
    NationalVaryingString(NationalVaryingStringDataType),
    Dimension(DimensionDataType),
    Simple(TypeNameDataType),
    Collection(CollectionDataType),
    Spatial(TypeNameDataType),
    /// Spanned text of `LONG [VARCHAR]`
    LongVarchar(Terminal),
    /// Spanned text of `LONG VARBINARY`
    LongVarbinary(Terminal),
}

impl Node for DataType {
    fn start(&self) -> Position {
        match self {
            DataType::String(t) | DataType::Simple(t) | DataType::Spatial(t) => t.type_name.position,
            DataType::NationalString(t) => t.national.position,
            DataType::NationalVaryingString(t) => t.start,
            DataType::Dimension(t) => t.type_name.position,
            DataType::Collection(t) => t.type_name.position,
            DataType::LongVarchar(t) | DataType::LongVarbinary(t) => t.position,
        }
    }
}

/// A category that is fully described by its type-name token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNameDataType {
    pub type_name: Terminal,
}

impl TypeNameDataType {
    pub fn new(type_name: Terminal) -> Self {
        TypeNameDataType { type_name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalStringDataType {
    pub national: Terminal,
    pub type_name: Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalVaryingStringDataType {
    pub start: Position,
    pub type_name: Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionDataType {
    pub type_name: Terminal,
    /// Spanned text of the size/precision arguments, e.g. `(10,2)`
    pub dimension: Option<Terminal>,
    /// The `UNSIGNED` marker token, when present
    pub unsigned: Option<Terminal>,
}

impl DimensionDataType {
    pub fn new(type_name: Terminal) -> Self {
        DimensionDataType { type_name, dimension: None, unsigned: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDataType {
    pub type_name: Terminal,
    /// STRING_LITERAL tokens of the value list, quotes included
    pub collection_options: Option<Vec<Terminal>>,
}
