use super::{Column, ColumnId, DbSchema, Dbms, DbmsId, ForeignKey, SchemaId, Table, TableId};

/// The root of a schema document.
///
/// Built once by the introspection/editing collaborator and handed to the
/// generator read-only; ids are derived from placement when the document is
/// assembled and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub dbmses: Vec<Dbms>,
}

impl Project {
    /// Assembles a document, assigning placement-derived ids throughout the
    /// tree.
    pub fn new(mut dbmses: Vec<Dbms>) -> Project {
        for (dbms_index, dbms) in dbmses.iter_mut().enumerate() {
            dbms.id = DbmsId(dbms_index);

            for (schema_index, schema) in dbms.schemas.iter_mut().enumerate() {
                schema.id = SchemaId {
                    dbms: dbms.id,
                    index: schema_index,
                };

                for (table_index, table) in schema.tables.iter_mut().enumerate() {
                    table.id = TableId {
                        schema: schema.id,
                        index: table_index,
                    };

                    for (column_index, column) in table.columns.iter_mut().enumerate() {
                        column.id = ColumnId {
                            table: table.id,
                            index: column_index,
                        };
                    }
                }
            }
        }

        Project { dbmses }
    }

    pub fn dbms(&self, id: DbmsId) -> &Dbms {
        &self.dbmses[id.0]
    }

    pub fn schema(&self, id: SchemaId) -> &DbSchema {
        &self.dbms(id.dbms).schemas[id.index]
    }

    pub fn table(&self, id: TableId) -> &Table {
        &self.schema(id.schema).tables[id.index]
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        &self.table(id.table).columns[id.index]
    }

    /// The dbms a table belongs to.
    pub fn dbms_of(&self, table: TableId) -> &Dbms {
        self.dbms(table.schema.dbms)
    }

    /// Every table in the document, in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.dbmses
            .iter()
            .flat_map(|dbms| dbms.schemas.iter())
            .flat_map(|schema| schema.tables.iter())
    }

    /// Resolves a table by name within one schema.
    pub fn resolve_table(&self, schema: SchemaId, name: &str) -> Option<&Table> {
        self.schema(schema).table(name)
    }

    /// Every foreign key in the target's schema whose foreign table is the
    /// target (backward direction), paired with its owning table, in schema
    /// declaration order.
    pub fn foreign_keys_referencing(&self, target: TableId) -> Vec<(TableId, &ForeignKey)> {
        let target_name = &self.table(target).name;
        let mut referencing = vec![];

        for table in &self.schema(target.schema).tables {
            for fk in &table.foreign_keys {
                let references_target = fk
                    .columns
                    .first()
                    .is_some_and(|pair| &pair.foreign_table == target_name);

                if references_target {
                    referencing.push((table.id, fk));
                }
            }
        }

        referencing
    }
}
