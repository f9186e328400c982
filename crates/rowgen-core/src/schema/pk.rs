/// The primary key declared by a table, as a list of column names.
///
/// Column membership is derived by name lookup; the key itself carries no
/// column ids so the editing tool can reorder columns freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub columns: Vec<String>,
}

impl PrimaryKey {
    pub fn new<I, S>(columns: I) -> PrimaryKey
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PrimaryKey {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}
