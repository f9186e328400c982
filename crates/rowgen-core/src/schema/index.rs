/// A secondary index declared on a table.
///
/// Carried through the document for the editing tool; the generator itself
/// only checks that index columns resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    /// Index name as declared in the database.
    pub name: String,

    /// Indexed column names, in index order.
    pub columns: Vec<String>,

    /// True for unique indexes.
    pub unique: bool,
}

impl Index {
    pub fn new<I, S>(name: impl Into<String>, columns: I, unique: bool) -> Index
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Index {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            unique,
        }
    }
}
