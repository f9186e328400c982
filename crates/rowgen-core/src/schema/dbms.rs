use super::DbSchema;
use crate::{engine::Engine, EngineType, Error, Result};

use std::fmt;

/// A configured database management system instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Dbms {
    /// Uniquely identifies the dbms in the document.
    pub id: DbmsId,

    /// Configured name of the dbms.
    pub name: String,

    /// The resolved engine type. `None` when the editing tool has not yet
    /// assigned one; generation cannot proceed without it.
    pub engine: Option<EngineType>,

    /// Schemas hosted by this dbms.
    pub schemas: Vec<DbSchema>,
}

/// Uniquely identifies a dbms within a [`Project`](super::Project).
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct DbmsId(pub usize);

impl Dbms {
    pub fn new(name: impl Into<String>, engine: Option<EngineType>) -> Dbms {
        Dbms {
            id: DbmsId::placeholder(),
            name: name.into(),
            engine,
            schemas: vec![],
        }
    }

    /// The engine's capabilities, or the fatal configuration error when no
    /// engine type is assigned.
    pub fn engine_or_err(&self) -> Result<&'static Engine> {
        self.engine
            .map(EngineType::engine)
            .ok_or_else(|| Error::unresolved_engine(&self.name))
    }
}

impl DbmsId {
    pub(crate) fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for DbmsId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "DbmsId({})", self.0)
    }
}
