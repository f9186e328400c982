use super::{BackwardGroups, Expand};
use crate::manager::{Cardinality, FinderDirection, FinderSpec, ManagerSpec, MethodSpec};
use crate::names;

use quote::quote;

impl Expand<'_> {
    /// For each referencing table reached through more than one key, one
    /// method returning the distinct union of the per-key finder streams.
    /// A table reached through a single key keeps just that finder; no
    /// delegating wrapper is emitted for it.
    pub(super) fn expand_aggregate_streamers(&self, spec: &mut ManagerSpec, groups: &BackwardGroups) {
        let rt = &self.rt;
        let entity_ident = &self.names.entity_ident;

        for (table_name, group) in groups {
            if group.finder_idents.len() < 2 {
                continue;
            }

            let method_ident = names::aggregate_finder_ident(table_name);
            let ref_entity = &group.names.entity_ident;
            let calls = group
                .finder_idents
                .iter()
                .map(|ident| quote!(self.#ident(entity)?));

            spec.aggregates.push(FinderSpec {
                direction: FinderDirection::Backward,
                cardinality: Cardinality::Many,
                dependency: None,
                referencing_table: Some(table_name.clone()),
                methods: vec![MethodSpec {
                    vis: quote!(pub),
                    ident: method_ident,
                    signature: quote!(
                        (&self, entity: &#entity_ident)
                            -> #rt::Result<#rt::EntityStream<#ref_entity>>
                    ),
                    body: vec![quote! {
                        Ok(#rt::stream::union_distinct([#(#calls),*]))
                    }],
                }],
            });
        }
    }
}
