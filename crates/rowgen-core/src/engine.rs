use crate::schema::Type;

/// Database engines the generator can emit row access code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineType {
    Sqlite,
    Postgresql,
    Mysql,
}

impl EngineType {
    /// The engine's code generation capabilities.
    pub fn engine(self) -> &'static Engine {
        match self {
            EngineType::Sqlite => &Engine::SQLITE,
            EngineType::Postgresql => &Engine::POSTGRESQL,
            EngineType::Mysql => &Engine::MYSQL,
        }
    }

    pub fn name(self) -> &'static str {
        self.engine().name
    }
}

/// How generated code reads one database storage type from the runtime's row
/// abstraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAccess {
    /// Accessor method name on the runtime row type.
    pub accessor: &'static str,

    /// Rust type the accessor produces, as written in generated code.
    pub rust_ty: &'static str,

    /// True when the accessor returns a bare machine type that cannot
    /// represent SQL NULL. Nullable columns must not use these accessors
    /// directly or NULL would silently decay to the type's default value.
    pub primitive: bool,
}

/// Per-engine row access capabilities.
///
/// The accessor tables are fixed data resolved once; column resolution is a
/// lookup, never a probe of the runtime row type.
#[derive(Debug)]
pub struct Engine {
    pub name: &'static str,

    /// Accessors for `INTEGER(n)` at byte widths 1, 2, 4, 8.
    integer_accessors: [&'static str; 4],

    /// Accessors for `FLOAT(n)` at byte widths 4, 8.
    float_accessors: [&'static str; 2],

    /// Accessor for `NUMERIC`. Engines without an exact decimal
    /// representation surface it as a float read.
    numeric_accessor: &'static str,
}

impl Engine {
    /// SQLite capabilities.
    ///
    /// SQLite ignores declared integer widths entirely; a column declared
    /// INTEGER(2) still stores up to 8 bytes, so every integer read goes
    /// through the widest accessor. NUMERIC has REAL affinity, there is no
    /// exact decimal storage class.
    pub const SQLITE: Engine = Engine {
        name: "sqlite",
        integer_accessors: ["i64", "i64", "i64", "i64"],
        float_accessors: ["f64", "f64"],
        numeric_accessor: "f64",
    };

    /// PostgreSQL capabilities.
    ///
    /// The wire protocol has no single-byte integer; INTEGER(1) widens to
    /// the two-byte read.
    pub const POSTGRESQL: Engine = Engine {
        name: "postgresql",
        integer_accessors: ["i16", "i16", "i32", "i64"],
        float_accessors: ["f32", "f64"],
        numeric_accessor: "decimal",
    };

    /// MySQL capabilities.
    pub const MYSQL: Engine = Engine {
        name: "mysql",
        integer_accessors: ["i8", "i16", "i32", "i64"],
        float_accessors: ["f32", "f64"],
        numeric_accessor: "decimal",
    };

    /// Resolves the row access for a database storage type, or `None` when
    /// the engine has no mapping for it.
    pub fn row_access(&self, ty: &Type) -> Option<RowAccess> {
        let accessor = match ty {
            Type::Boolean => "bool",
            Type::Integer(width) => match width {
                1 => self.integer_accessors[0],
                2 => self.integer_accessors[1],
                4 => self.integer_accessors[2],
                8 => self.integer_accessors[3],
                _ => return None,
            },
            Type::Float(width) => match width {
                4 => self.float_accessors[0],
                8 => self.float_accessors[1],
                _ => return None,
            },
            Type::Text | Type::VarChar(_) => "string",
            Type::Uuid => "uuid",
            Type::Numeric => self.numeric_accessor,
            Type::Blob => "bytes",
            Type::Timestamp => "timestamp",
            Type::Date => "date",
            Type::Time => "time",
            Type::Custom(_) => return None,
        };

        Some(accessor_table(accessor))
    }
}

/// The accessor surface of the runtime row abstraction.
///
/// Primitive accessors return bare machine values; the rest return
/// `Option<T>` and can represent absence.
fn accessor_table(accessor: &'static str) -> RowAccess {
    let (rust_ty, primitive) = match accessor {
        "bool" => ("bool", true),
        "i8" => ("i8", true),
        "i16" => ("i16", true),
        "i32" => ("i32", true),
        "i64" => ("i64", true),
        "f32" => ("f32", true),
        "f64" => ("f64", true),
        "string" => ("String", false),
        "bytes" => ("Vec<u8>", false),
        "uuid" => ("uuid::Uuid", false),
        "decimal" => ("rust_decimal::Decimal", false),
        "timestamp" => ("jiff::Timestamp", false),
        "date" => ("jiff::civil::Date", false),
        "time" => ("jiff::civil::Time", false),
        _ => unreachable!("accessor `{accessor}` missing from the accessor table"),
    };

    RowAccess {
        accessor,
        rust_ty,
        primitive,
    }
}
