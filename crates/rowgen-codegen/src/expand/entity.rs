use super::Expand;
use crate::manager::AccessorSpec;
use crate::{names, typemap};

use rowgen_core::Result;

impl Expand<'_> {
    /// One accessor spec per column, in declared order. The ordinal doubles
    /// as the 0-based row read position; construction from a row reads
    /// columns positionally in table order.
    pub(super) fn expand_accessors(&self) -> Result<Vec<AccessorSpec>> {
        self.table
            .columns
            .iter()
            .enumerate()
            .map(|(position, column)| {
                let read = typemap::resolve(self.table, column, self.engine, position, &self.rt)?;

                Ok(AccessorSpec {
                    column_index: position,
                    column_name: column.name.clone(),
                    getter: names::getter_ident(column),
                    setter: names::setter_ident(column),
                    entity_ty: read.entity_ty,
                    nullable: column.nullable,
                    primary_key: self.table.is_primary_key(column),
                    read_expr: read.read_expr,
                })
            })
            .collect()
    }
}
