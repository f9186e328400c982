use super::{table, TableId, Type};

use std::fmt;

/// A table column as declared in the schema document.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the document. The index doubles as
    /// the column's ordinal position: row reads happen in declared order.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The declared database storage type.
    pub ty: Type,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// Optional custom type mapper applied after the raw row read. Absent
    /// means the identity mapper: the raw value already is the entity value.
    pub type_mapper: Option<TypeMapper>,
}

/// Uniquely identifies a column within a [`Project`](super::Project).
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

/// A named transformation from the raw database value to the entity value.
///
/// The generator only records the mapper; the mapper type itself lives in the
/// application and must expose `to_entity` / `to_database` conversions to the
/// generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapper {
    /// Rust path of the mapper type, as imported by generated code.
    pub path: String,

    /// Rust type the mapper produces on the entity side.
    pub entity_ty: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            id: ColumnId::placeholder(),
            name: name.into(),
            ty,
            nullable: false,
            type_mapper: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Column {
        self.nullable = nullable;
        self
    }

    pub fn with_mapper(mut self, mapper: TypeMapper) -> Column {
        self.type_mapper = Some(mapper);
        self
    }
}

impl TypeMapper {
    pub fn new(path: impl Into<String>, entity_ty: impl Into<String>) -> TypeMapper {
        TypeMapper {
            path: path.into(),
            entity_ty: entity_ty.into(),
        }
    }
}

impl ColumnId {
    pub(crate) fn placeholder() -> Self {
        Self {
            table: table::TableId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({:?}/{})", self.table, self.index)
    }
}
