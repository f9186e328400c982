use std::fmt;

/// An error raised while resolving a schema document into generated code.
///
/// Configuration errors abort generation for the affected table; they carry
/// the schema context (dbms, table, column, foreign key) needed to fix the
/// document in the editing tool.
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    UnresolvedEngine {
        dbms: String,
    },
    UnmappedColumnType {
        table: String,
        column: String,
        ty: String,
        engine: String,
    },
    UnknownForeignTable {
        table: String,
        fk: String,
        foreign_table: String,
    },
    UnknownForeignColumn {
        table: String,
        fk: String,
        foreign_table: String,
        foreign_column: String,
    },
    UnknownLocalColumn {
        table: String,
        fk: String,
        column: String,
    },
    CompositeForeignKey {
        table: String,
        fk: String,
        arity: usize,
    },
    InvalidDocument {
        message: String,
    },
    Other(anyhow::Error),
}

impl Error {
    pub fn unresolved_engine(dbms: impl Into<String>) -> Error {
        ErrorKind::UnresolvedEngine { dbms: dbms.into() }.into()
    }

    pub fn unmapped_column_type(
        table: impl Into<String>,
        column: impl Into<String>,
        ty: impl Into<String>,
        engine: impl Into<String>,
    ) -> Error {
        ErrorKind::UnmappedColumnType {
            table: table.into(),
            column: column.into(),
            ty: ty.into(),
            engine: engine.into(),
        }
        .into()
    }

    pub fn unknown_foreign_table(
        table: impl Into<String>,
        fk: impl Into<String>,
        foreign_table: impl Into<String>,
    ) -> Error {
        ErrorKind::UnknownForeignTable {
            table: table.into(),
            fk: fk.into(),
            foreign_table: foreign_table.into(),
        }
        .into()
    }

    pub fn unknown_foreign_column(
        table: impl Into<String>,
        fk: impl Into<String>,
        foreign_table: impl Into<String>,
        foreign_column: impl Into<String>,
    ) -> Error {
        ErrorKind::UnknownForeignColumn {
            table: table.into(),
            fk: fk.into(),
            foreign_table: foreign_table.into(),
            foreign_column: foreign_column.into(),
        }
        .into()
    }

    pub fn unknown_local_column(
        table: impl Into<String>,
        fk: impl Into<String>,
        column: impl Into<String>,
    ) -> Error {
        ErrorKind::UnknownLocalColumn {
            table: table.into(),
            fk: fk.into(),
            column: column.into(),
        }
        .into()
    }

    pub fn composite_foreign_key(
        table: impl Into<String>,
        fk: impl Into<String>,
        arity: usize,
    ) -> Error {
        ErrorKind::CompositeForeignKey {
            table: table.into(),
            fk: fk.into(),
            arity,
        }
        .into()
    }

    pub fn invalid_document(message: impl Into<String>) -> Error {
        ErrorKind::InvalidDocument {
            message: message.into(),
        }
        .into()
    }

    /// True for errors a user fixes by editing the schema document.
    pub fn is_configuration(&self) -> bool {
        !matches!(*self.kind, ErrorKind::Other(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;

        match &*self.kind {
            UnresolvedEngine { dbms } => {
                write!(f, "dbms `{dbms}` has no resolvable database engine type")
            }
            UnmappedColumnType {
                table,
                column,
                ty,
                engine,
            } => write!(
                f,
                "column `{table}.{column}` has type `{ty}` which is not mapped for engine `{engine}`"
            ),
            UnknownForeignTable {
                table,
                fk,
                foreign_table,
            } => write!(
                f,
                "foreign key `{fk}` on table `{table}` references unknown table `{foreign_table}`"
            ),
            UnknownForeignColumn {
                table,
                fk,
                foreign_table,
                foreign_column,
            } => write!(
                f,
                "foreign key `{fk}` on table `{table}` references unknown column `{foreign_table}.{foreign_column}`"
            ),
            UnknownLocalColumn { table, fk, column } => write!(
                f,
                "foreign key `{fk}` on table `{table}` names unknown local column `{column}`"
            ),
            CompositeForeignKey { table, fk, arity } => write!(
                f,
                "foreign key `{fk}` on table `{table}` has {arity} column pairs; only single-column keys are supported"
            ),
            InvalidDocument { message } => write!(f, "invalid schema document: {message}"),
            Other(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            ErrorKind::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Box::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        ErrorKind::Other(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unresolved_engine_display() {
        let err = Error::unresolved_engine("analytics");
        assert_eq!(
            err.to_string(),
            "dbms `analytics` has no resolvable database engine type"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn unmapped_column_type_display() {
        let err = Error::unmapped_column_type("films", "rating", "CUSTOM(mpaa)", "sqlite");
        assert_eq!(
            err.to_string(),
            "column `films.rating` has type `CUSTOM(mpaa)` which is not mapped for engine `sqlite`"
        );
    }

    #[test]
    fn unknown_foreign_table_display() {
        let err = Error::unknown_foreign_table("films", "fk_films_rating", "ratingz");
        assert_eq!(
            err.to_string(),
            "foreign key `fk_films_rating` on table `films` references unknown table `ratingz`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
        assert!(!err.is_configuration());
    }
}
