use super::Expand;
use crate::manager::{ManagerSpec, MethodSpec};

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    /// Identity accessors, row construction, empty-entity and deep-copy
    /// construction, and the field listings, in the emission order the
    /// supertype declares them.
    pub(super) fn expand_table_body(&self, spec: &mut ManagerSpec) {
        let rt = &self.rt;
        let entity_ident = &self.names.entity_ident;

        let create_support = MethodSpec {
            vis: quote!(),
            ident: format_ident!("create_support"),
            signature: quote!((&self) -> #rt::ManagerSupport<#entity_ident>),
            body: vec![quote!(#rt::ManagerSupport::create(Self::entity_from_row))],
        };

        let identity = [
            ("dbms_name", spec.dbms_name.as_str()),
            ("schema_name", spec.schema_name.as_str()),
            ("table_name", spec.table_name.as_str()),
        ]
        .map(|(method, value)| MethodSpec {
            vis: quote!(),
            ident: format_ident!("{method}"),
            signature: quote!((&self) -> &'static str),
            body: vec![quote!(#value)],
        });

        let entity_from_row = MethodSpec {
            vis: quote!(),
            ident: format_ident!("entity_from_row"),
            signature: quote!((&self, row: &dyn #rt::Row) -> #rt::Result<#entity_ident>),
            body: {
                let mut statements = vec![quote!(let mut entity = self.new_empty_entity();)];

                for accessor in &spec.accessors {
                    let setter = &accessor.setter;
                    let read = &accessor.read_expr;
                    statements.push(quote!(entity.#setter(#read);));
                }

                statements.push(quote!(Ok(entity)));
                statements
            },
        };

        let new_empty_entity = MethodSpec {
            vis: quote!(),
            ident: format_ident!("new_empty_entity"),
            signature: quote!((&self) -> #entity_ident),
            body: vec![quote!(#entity_ident::default())],
        };

        let fields = MethodSpec {
            vis: quote!(),
            ident: format_ident!("fields"),
            signature: quote!((&self) -> Vec<#rt::DynField<#entity_ident>>),
            body: vec![self.field_listing(spec, false)],
        };

        let primary_key_fields = MethodSpec {
            vis: quote!(),
            ident: format_ident!("primary_key_fields"),
            signature: quote!((&self) -> Vec<#rt::DynField<#entity_ident>>),
            body: vec![self.field_listing(spec, true)],
        };

        let new_copy_of = MethodSpec {
            vis: quote!(),
            ident: format_ident!("new_copy_of"),
            signature: quote!((&self, source: &#entity_ident) -> #entity_ident),
            body: {
                let mut statements = vec![quote!(let mut copy = self.new_empty_entity();)];

                for accessor in &spec.accessors {
                    let getter = &accessor.getter;
                    let setter = &accessor.setter;

                    if accessor.nullable {
                        // Absent optional values are skipped so the copy
                        // keeps its empty default instead of an explicit
                        // overwrite.
                        statements.push(quote! {
                            if let Some(value) = source.#getter() {
                                copy.#setter(Some(value.clone()));
                            }
                        });
                    } else {
                        statements.push(quote!(copy.#setter(source.#getter().clone());));
                    }
                }

                statements.push(quote!(copy));
                statements
            },
        };

        let [dbms_name, schema_name, table_name] = identity;

        spec.table_body = vec![
            create_support,
            dbms_name,
            schema_name,
            table_name,
            entity_from_row,
            new_empty_entity,
            fields,
            primary_key_fields,
            new_copy_of,
        ];
    }

    fn field_listing(&self, spec: &ManagerSpec, primary_key_only: bool) -> TokenStream {
        let entity_ident = &self.names.entity_ident;

        let items = spec
            .accessors
            .iter()
            .filter(|accessor| !primary_key_only || accessor.primary_key)
            .map(|accessor| {
                let getter = &accessor.getter;
                quote!(#entity_ident::fields().#getter().erased())
            });

        quote!(vec![#(#items),*])
    }
}
