use rowgen_core::schema::{Column, ForeignKey, Project, Table, TableId};
use rowgen_core::{Error, Result};

/// A foreign key with both column endpoints resolved against the document.
///
/// `table`/`column` are the owning (referencing) side; `foreign_table`/
/// `foreign_column` the referenced side. For a forward key the owning side
/// is the table being generated; for a backward key it is the other table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedFk<'a> {
    pub fk: &'a ForeignKey,
    pub table: &'a Table,
    pub column: &'a Column,
    pub foreign_table: &'a Table,
    pub foreign_column: &'a Column,
}

pub(crate) fn resolve<'a>(
    project: &'a Project,
    owner: TableId,
    fk: &'a ForeignKey,
) -> Result<ResolvedFk<'a>> {
    let table = project.table(owner);

    let [pair] = fk.columns.as_slice() else {
        return Err(Error::composite_foreign_key(
            &table.name,
            &fk.name,
            fk.columns.len(),
        ));
    };

    let column = table
        .column(&pair.column)
        .ok_or_else(|| Error::unknown_local_column(&table.name, &fk.name, &pair.column))?;

    let foreign_table = project
        .resolve_table(owner.schema, &pair.foreign_table)
        .ok_or_else(|| Error::unknown_foreign_table(&table.name, &fk.name, &pair.foreign_table))?;

    let foreign_column = foreign_table.column(&pair.foreign_column).ok_or_else(|| {
        Error::unknown_foreign_column(
            &table.name,
            &fk.name,
            &pair.foreign_table,
            &pair.foreign_column,
        )
    })?;

    Ok(ResolvedFk {
        fk,
        table,
        column,
        foreign_table,
        foreign_column,
    })
}

/// Foreign keys the table declares, in declaration order.
pub(crate) fn forward_keys<'a>(project: &'a Project, table: TableId) -> Result<Vec<ResolvedFk<'a>>> {
    project
        .table(table)
        .foreign_keys
        .iter()
        .map(|fk| resolve(project, table, fk))
        .collect()
}

/// Foreign keys elsewhere in the schema that reference the table, in schema
/// declaration order.
pub(crate) fn backward_keys<'a>(
    project: &'a Project,
    table: TableId,
) -> Result<Vec<ResolvedFk<'a>>> {
    project
        .foreign_keys_referencing(table)
        .into_iter()
        .map(|(owner, fk)| resolve(project, owner, fk))
        .collect()
}
