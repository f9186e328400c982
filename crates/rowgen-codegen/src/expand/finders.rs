use super::{BackwardGroup, BackwardGroups, Expand, ManagerDeps};
use crate::manager::{Cardinality, FinderDirection, FinderSpec, ManagerSpec, MethodSpec};
use crate::names::TableNames;
use crate::{names, relation};

use quote::quote;
use rowgen_core::Result;

impl Expand<'_> {
    /// For every key elsewhere in the schema that references this table:
    /// a streaming finder plus its descriptor companion, and a deduplicated
    /// dependency on the referencing table's manager. The grouping map feeds
    /// the aggregate phase.
    pub(super) fn expand_backward_finders(
        &self,
        spec: &mut ManagerSpec,
        deps: &mut ManagerDeps,
    ) -> Result<BackwardGroups> {
        let rt = &self.rt;
        let entity_ident = &self.names.entity_ident;
        let mut groups = BackwardGroups::default();

        for fk in relation::backward_keys(self.project, self.table.id)? {
            let referencing = TableNames::for_table(fk.table);
            let dep = self.manager_dependency(spec, deps, fk.table);

            let method_ident = names::backward_finder_ident(&fk.table.name, &fk.column.name);
            let companion_ident = names::backward_companion_ident(&fk.table.name, &fk.column.name);

            let ref_entity = &referencing.entity_ident;
            let column_getter = names::getter_ident(fk.column);
            let manager_ref = dep.by_ref();

            let method = MethodSpec {
                vis: quote!(pub),
                ident: method_ident.clone(),
                signature: quote!(
                    (&self, entity: &#entity_ident)
                        -> #rt::Result<#rt::EntityStream<#ref_entity>>
                ),
                body: vec![quote!(self.#companion_ident().apply(entity))],
            };

            let companion = MethodSpec {
                vis: quote!(pub),
                ident: companion_ident,
                signature: quote!((&self) -> #rt::BackwardFinder<#entity_ident, #ref_entity>),
                body: vec![quote!(
                    #ref_entity::fields().#column_getter().backward_finder(#manager_ref)
                )],
            };

            groups
                .entry(fk.table.name.clone())
                .or_insert_with(|| BackwardGroup {
                    names: referencing.clone(),
                    finder_idents: vec![],
                })
                .finder_idents
                .push(method_ident);

            spec.backward_finders.push(FinderSpec {
                direction: FinderDirection::Backward,
                cardinality: Cardinality::Many,
                dependency: dep.field_ident().cloned(),
                referencing_table: Some(fk.table.name.clone()),
                methods: vec![method, companion],
            });
        }

        Ok(groups)
    }

    /// For every key this table declares, the owning-side lookup. Nullable
    /// local columns return an optional entity and short-circuit on absence
    /// without querying; required columns must match or the generated code
    /// raises the distinct integrity error.
    pub(super) fn expand_forward_finders(
        &self,
        spec: &mut ManagerSpec,
        deps: &mut ManagerDeps,
    ) -> Result<()> {
        let rt = &self.rt;
        let entity_ident = &self.names.entity_ident;

        for fk in relation::forward_keys(self.project, self.table.id)? {
            let foreign = TableNames::for_table(fk.foreign_table);
            let dep = self.manager_dependency(spec, deps, fk.foreign_table);

            let method_ident = names::forward_finder_ident(&fk.column.name);
            let foreign_entity = &foreign.entity_ident;
            let local_getter = names::getter_ident(fk.column);
            let foreign_getter = names::getter_ident(fk.foreign_column);
            let manager = dep.access();

            let (cardinality, signature, body) = if fk.column.nullable {
                (
                    Cardinality::OptionalOne,
                    quote!((&self, entity: &#entity_ident) -> #rt::Result<Option<#foreign_entity>>),
                    vec![
                        quote! {
                            let Some(value) = entity.#local_getter() else {
                                return Ok(None);
                            };
                        },
                        quote! {
                            #manager
                                .stream()?
                                .filter(#foreign_entity::fields().#foreign_getter().equal(value.clone()))
                                .first()
                        },
                    ],
                )
            } else {
                let message = format!(
                    "foreign key constraint error: `{}.{}` = {{:?}} has no match in `{}.{}`",
                    self.table.name, fk.column.name, fk.foreign_table.name, fk.foreign_column.name
                );

                (
                    Cardinality::One,
                    quote!((&self, entity: &#entity_ident) -> #rt::Result<#foreign_entity>),
                    vec![quote! {
                        #manager
                            .stream()?
                            .filter(#foreign_entity::fields().#foreign_getter().equal(entity.#local_getter().clone()))
                            .first()?
                            .ok_or_else(|| #rt::Error::integrity_violation(format!(
                                #message,
                                entity.#local_getter()
                            )))
                    }],
                )
            };

            spec.forward_finders.push(FinderSpec {
                direction: FinderDirection::Forward,
                cardinality,
                dependency: dep.field_ident().cloned(),
                referencing_table: None,
                methods: vec![MethodSpec {
                    vis: quote!(pub),
                    ident: method_ident,
                    signature,
                    body,
                }],
            });
        }

        Ok(())
    }
}
