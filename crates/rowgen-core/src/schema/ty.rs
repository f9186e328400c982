use std::fmt;

/// Database storage types as declared in the schema document.
///
/// These are the external column types the introspection layer reports
/// (the types that appear in `CREATE TABLE` statements), not the Rust types
/// generated entities carry. The mapping between the two happens in the
/// engine's row access table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// Exact decimal number
    Numeric,

    /// Unconstrained binary type
    Blob,

    /// An instant in time
    Timestamp,

    /// A civil date in the Gregorian calendar
    Date,

    /// A civil "wall clock" time
    Time,

    /// User-specified unrecognized type
    Custom(String),
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "BOOLEAN"),
            Type::Integer(width) => write!(f, "INTEGER({width})"),
            Type::Float(width) => write!(f, "FLOAT({width})"),
            Type::Text => write!(f, "TEXT"),
            Type::VarChar(len) => write!(f, "VARCHAR({len})"),
            Type::Uuid => write!(f, "UUID"),
            Type::Numeric => write!(f, "NUMERIC"),
            Type::Blob => write!(f, "BLOB"),
            Type::Timestamp => write!(f, "TIMESTAMP"),
            Type::Date => write!(f, "DATE"),
            Type::Time => write!(f, "TIME"),
            Type::Custom(name) => write!(f, "CUSTOM({name})"),
        }
    }
}
