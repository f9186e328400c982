mod column;
pub use column::{Column, ColumnId, TypeMapper};

mod dbms;
pub use dbms::{Dbms, DbmsId};

mod db_schema;
pub use db_schema::{DbSchema, SchemaId};

mod fk;
pub use fk::{ForeignKey, ForeignKeyColumn};

mod index;
pub use index::Index;

mod name;
pub use name::{pluralize, singularize, Name};

mod pk;
pub use pk::PrimaryKey;

mod project;
pub use project::Project;

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;

mod verify;
