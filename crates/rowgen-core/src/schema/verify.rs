use super::{Project, Table, TableId};
use crate::{Error, Result};

use std::collections::HashSet;

impl Project {
    /// Structural checks for one table, run before generation. Reference
    /// resolution across tables happens during generation itself; these
    /// checks only reject documents that are internally inconsistent.
    pub fn verify_table(&self, table: TableId) -> Result<()> {
        let table = self.table(table);

        verify_column_names_are_unique(table)?;
        verify_primary_key_columns_exist(table)?;
        verify_index_columns_exist(table)?;
        verify_foreign_keys(table)?;
        Ok(())
    }
}

fn verify_column_names_are_unique(table: &Table) -> Result<()> {
    let mut names = HashSet::new();

    for column in &table.columns {
        if !names.insert(column.name.as_str()) {
            return Err(Error::invalid_document(format!(
                "table `{}` declares column `{}` more than once",
                table.name, column.name
            )));
        }
    }

    Ok(())
}

fn verify_primary_key_columns_exist(table: &Table) -> Result<()> {
    let Some(pk) = &table.primary_key else {
        return Ok(());
    };

    for name in &pk.columns {
        if table.column(name).is_none() {
            return Err(Error::invalid_document(format!(
                "primary key of table `{}` names unknown column `{}`",
                table.name, name
            )));
        }
    }

    Ok(())
}

fn verify_index_columns_exist(table: &Table) -> Result<()> {
    for index in &table.indices {
        for name in &index.columns {
            if table.column(name).is_none() {
                return Err(Error::invalid_document(format!(
                    "index `{}` on table `{}` names unknown column `{}`",
                    index.name, table.name, name
                )));
            }
        }
    }

    Ok(())
}

fn verify_foreign_keys(table: &Table) -> Result<()> {
    for fk in &table.foreign_keys {
        if fk.columns.len() != 1 {
            return Err(Error::composite_foreign_key(
                &table.name,
                &fk.name,
                fk.columns.len(),
            ));
        }

        let pair = &fk.columns[0];
        if table.column(&pair.column).is_none() {
            return Err(Error::unknown_local_column(&table.name, &fk.name, &pair.column));
        }
    }

    Ok(())
}
