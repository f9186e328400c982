use super::{Column, ForeignKey, Index, PrimaryKey, SchemaId};

use std::fmt;

/// A database table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Uniquely identifies the table in the document.
    pub id: TableId,

    /// Name of the table in the database.
    pub name: String,

    /// The table's columns, in declared order.
    pub columns: Vec<Column>,

    /// The declared primary key, if any.
    pub primary_key: Option<PrimaryKey>,

    /// Secondary indexes declared on the table.
    pub indices: Vec<Index>,

    /// Foreign keys this table declares (forward direction).
    pub foreign_keys: Vec<ForeignKey>,
}

/// Uniquely identifies a table within a [`Project`](super::Project).
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId {
    pub schema: SchemaId,
    pub index: usize,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            id: TableId::placeholder(),
            name: name.into(),
            columns: vec![],
            primary_key: None,
            indices: vec![],
            foreign_keys: vec![],
        }
    }

    /// Looks up a column by its database name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns the column when the table's primary key contains it.
    pub fn primary_key_column(&self, name: &str) -> Option<&Column> {
        let pk = self.primary_key.as_ref()?;
        if pk.columns.iter().any(|pk_name| pk_name == name) {
            self.column(name)
        } else {
            None
        }
    }

    /// True when the column is part of the table's primary key.
    pub fn is_primary_key(&self, column: &Column) -> bool {
        self.primary_key_column(&column.name).is_some()
    }

    /// Primary-key columns in declared column order (not key declaration
    /// order).
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns
            .iter()
            .filter(|column| self.is_primary_key(column))
    }
}

impl TableId {
    pub(crate) fn placeholder() -> Self {
        Self {
            schema: SchemaId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({:?}/{})", self.schema, self.index)
    }
}
