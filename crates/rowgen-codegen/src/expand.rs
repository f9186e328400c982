mod entity;
mod finders;
mod streamers;
mod table_body;

use crate::manager::{DependencySpec, ManagerSpec};
use crate::names::TableNames;

use indexmap::IndexMap;
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use rowgen_core::engine::Engine;
use rowgen_core::schema::{Project, Table, TableId};
use rowgen_core::Result;

use std::collections::HashSet;

/// Expands one table into its manager specification.
///
/// Phases run in a fixed order: backward foreign keys, forward foreign keys,
/// table body, aggregate streamers. Each phase extends the accumulated spec;
/// the dependency dedup set and the backward grouping map are locals of one
/// table's expansion and never cross tables.
pub(crate) struct Expand<'a> {
    pub(crate) project: &'a Project,
    pub(crate) table: &'a Table,
    pub(crate) engine: &'static Engine,
    pub(crate) names: TableNames,

    /// Path prefix for runtime types in generated code.
    pub(crate) rt: TokenStream,
}

/// Manager dependencies already injected, keyed by field identifier.
#[derive(Default)]
pub(crate) struct ManagerDeps {
    seen: HashSet<String>,
}

impl ManagerDeps {
    /// True the first time a manager is seen.
    fn insert(&mut self, ident: &Ident) -> bool {
        self.seen.insert(ident.to_string())
    }
}

/// How a finder body reaches the manager it queries.
pub(crate) enum DepExpr {
    /// The key resolves to the table's own manager.
    SelfManager,

    /// An injected dependency field.
    Field(Ident),
}

impl DepExpr {
    /// Expression to call manager methods on.
    fn access(&self) -> TokenStream {
        match self {
            DepExpr::SelfManager => quote!(self),
            DepExpr::Field(field) => quote!(self.#field),
        }
    }

    /// Expression to pass the manager by reference.
    fn by_ref(&self) -> TokenStream {
        match self {
            DepExpr::SelfManager => quote!(self),
            DepExpr::Field(field) => quote!(&self.#field),
        }
    }

    fn field_ident(&self) -> Option<&Ident> {
        match self {
            DepExpr::SelfManager => None,
            DepExpr::Field(field) => Some(field),
        }
    }
}

/// Backward finders grouped by referencing table, in first-seen order.
pub(crate) type BackwardGroups = IndexMap<String, BackwardGroup>;

pub(crate) struct BackwardGroup {
    pub(crate) names: TableNames,
    pub(crate) finder_idents: Vec<Ident>,
}

impl<'a> Expand<'a> {
    pub(crate) fn new(project: &'a Project, table_id: TableId) -> Result<Expand<'a>> {
        let table = project.table(table_id);
        let engine = project.dbms_of(table_id).engine_or_err()?;

        Ok(Expand {
            project,
            table,
            engine,
            names: TableNames::for_table(table),
            rt: quote!(rowgen::runtime),
        })
    }

    /// Runs the generation phases in their fixed order.
    pub(crate) fn expand(&self) -> Result<ManagerSpec> {
        let mut spec = self.init_spec()?;
        let mut deps = ManagerDeps::default();

        let groups = self.expand_backward_finders(&mut spec, &mut deps)?;
        self.expand_forward_finders(&mut spec, &mut deps)?;
        self.expand_table_body(&mut spec);
        self.expand_aggregate_streamers(&mut spec, &groups);

        Ok(spec)
    }

    fn init_spec(&self) -> Result<ManagerSpec> {
        let rt = &self.rt;
        let dbms = self.project.dbms_of(self.table.id);
        let schema = self.project.schema(self.table.id.schema);

        let accessors = self.expand_accessors()?;
        let primary_key = self
            .table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| self.table.is_primary_key(column))
            .map(|(index, _)| index)
            .collect();

        Ok(ManagerSpec {
            dbms_name: dbms.name.clone(),
            schema_name: schema.name.clone(),
            table_name: self.table.name.clone(),
            module_ident: self.names.module_ident.clone(),
            entity_ident: self.names.entity_ident.clone(),
            fields_ident: self.names.fields_ident.clone(),
            manager_ident: self.names.manager_ident.clone(),
            supertype: quote!(#rt::Manager),
            runtime: self.rt.clone(),
            dependencies: vec![],
            accessors,
            primary_key,
            backward_finders: vec![],
            forward_finders: vec![],
            aggregates: vec![],
            table_body: vec![],
        })
    }

    /// Registers a manager dependency unless it resolves to the table's own
    /// manager or was injected before.
    fn manager_dependency(
        &self,
        spec: &mut ManagerSpec,
        deps: &mut ManagerDeps,
        target: &Table,
    ) -> DepExpr {
        if target.id == self.table.id {
            return DepExpr::SelfManager;
        }

        let names = TableNames::for_table(target);

        if deps.insert(&names.dep_field_ident) {
            spec.dependencies.push(DependencySpec {
                field_ident: names.dep_field_ident.clone(),
                manager_ty: names.manager_ident.clone(),
                entity_ident: names.entity_ident.clone(),
                module_ident: names.module_ident.clone(),
            });
        }

        DepExpr::Field(names.dep_field_ident)
    }
}
