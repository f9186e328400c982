/// A foreign key declared by a table.
///
/// The owning table is the referencing side; each column pair names a local
/// column and the column it references on the foreign table. Only
/// single-column keys are generated; the verifier rejects composite keys
/// before generation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name as declared in the database.
    pub name: String,

    /// Ordered column pairs. Exactly one for generated keys.
    pub columns: Vec<ForeignKeyColumn>,
}

/// One (local, foreign) column pair of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyColumn {
    /// Local column on the owning table.
    pub column: String,

    /// Referenced table, in the same schema.
    pub foreign_table: String,

    /// Referenced column on the foreign table.
    pub foreign_column: String,
}

impl ForeignKey {
    /// A single-column foreign key, the fully supported case.
    pub fn single(
        name: impl Into<String>,
        column: impl Into<String>,
        foreign_table: impl Into<String>,
        foreign_column: impl Into<String>,
    ) -> ForeignKey {
        ForeignKey {
            name: name.into(),
            columns: vec![ForeignKeyColumn {
                column: column.into(),
                foreign_table: foreign_table.into(),
                foreign_column: foreign_column.into(),
            }],
        }
    }
}
