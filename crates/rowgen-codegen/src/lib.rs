mod expand;
mod manager;
mod names;
mod relation;
mod typemap;
mod util;

pub use manager::{
    AccessorSpec, Cardinality, DependencySpec, FinderDirection, FinderSpec, ManagerSpec,
    MethodSpec,
};

use proc_macro2::TokenStream;
use rowgen_core::schema::TableId;
use rowgen_core::{Error, Project, Result};

/// One generated source file, named after its table's module.
pub struct GeneratedFile {
    /// Database table the file was generated from.
    pub table: String,

    /// Module file name, e.g. `film.rs`.
    pub file_name: String,

    pub tokens: TokenStream,
}

/// A table whose generation was aborted, with the configuration error that
/// aborted it.
pub struct Failure {
    pub table: String,
    pub error: Error,
}

/// Result of a full generation pass over a schema document.
pub struct Output {
    pub files: Vec<GeneratedFile>,
    pub failures: Vec<Failure>,
}

/// Generates the manager specification for a single table.
///
/// The document is consumed read-only; the returned spec is self-contained
/// and holds no references into it.
pub fn generate_table(project: &Project, table: TableId) -> Result<ManagerSpec> {
    project.verify_table(table)?;
    expand::Expand::new(project, table)?.expand()
}

/// Generates one file per table in the document.
///
/// A table that fails to resolve aborts only its own file and is reported
/// with context; sibling tables still generate. Nothing partial is emitted
/// for a failed table.
pub fn generate(project: &Project) -> Output {
    let mut files = vec![];
    let mut failures = vec![];

    for table in project.tables() {
        match generate_table(project, table.id) {
            Ok(spec) => files.push(GeneratedFile {
                table: table.name.clone(),
                file_name: format!("{}.rs", spec.module_ident),
                tokens: spec.render(),
            }),
            Err(error) => failures.push(Failure {
                table: table.name.clone(),
                error,
            }),
        }
    }

    Output { files, failures }
}
