use crate::util;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Result cardinality of a finder method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// A single entity that may be absent (nullable local column).
    OptionalOne,

    /// Exactly one entity; no match is an integrity violation at runtime.
    One,

    /// A lazy stream of entities.
    Many,
}

/// Which side of the foreign key the finder navigates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderDirection {
    /// Declared by the generated table, pointing outward.
    Forward,

    /// Declared by another table, pointing into the generated table.
    Backward,
}

/// A generated method: visibility, name, signature, and ordered body
/// fragments. Rendering is the only step that flattens the fragments.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    pub vis: TokenStream,
    pub ident: Ident,

    /// Parameter list and return type, e.g. `(&self) -> &'static str`.
    pub signature: TokenStream,

    /// Ordered statements/fragments of the body.
    pub body: Vec<TokenStream>,
}

impl MethodSpec {
    pub fn render(&self) -> TokenStream {
        let vis = &self.vis;
        let ident = &self.ident;
        let signature = &self.signature;
        let body = &self.body;

        quote! {
            #vis fn #ident #signature {
                #(#body)*
            }
        }
    }
}

/// A manager dependency injected through the generated constructor.
#[derive(Debug, Clone)]
pub struct DependencySpec {
    /// Struct field / constructor parameter name, e.g. `rating_manager`.
    pub field_ident: Ident,

    /// Manager type, e.g. `RatingManager`.
    pub manager_ty: Ident,

    /// Entity type of the dependency's table, e.g. `Rating`.
    pub entity_ident: Ident,

    /// Sibling module the dependency is imported from, e.g. `rating`.
    pub module_ident: Ident,
}

/// Read/write accessors generated for one column, in declared column order.
#[derive(Debug, Clone)]
pub struct AccessorSpec {
    /// Ordinal position; doubles as the 0-based row read position.
    pub column_index: usize,

    /// Database column name.
    pub column_name: String,

    pub getter: Ident,
    pub setter: Ident,

    /// Entity-side Rust type, before optional wrapping.
    pub entity_ty: TokenStream,

    pub nullable: bool,
    pub primary_key: bool,

    /// Positional row read expression feeding the setter.
    pub read_expr: TokenStream,
}

/// A foreign-key navigation method on the generated manager.
#[derive(Debug, Clone)]
pub struct FinderSpec {
    pub direction: FinderDirection,
    pub cardinality: Cardinality,

    /// Manager dependency the finder queries; `None` when it resolves
    /// through `self` (self-referencing key, or an aggregate delegating to
    /// other finders).
    pub dependency: Option<Ident>,

    /// Referencing table (backward finders and aggregates), used to group
    /// finders reaching this table through different keys.
    pub referencing_table: Option<String>,

    /// The finder method, plus its descriptor companion for backward keys.
    pub methods: Vec<MethodSpec>,
}

/// The composed specification for one table's generated file.
///
/// Everything the emission step needs is explicit here: names, supertype,
/// dependency fields, accessors, finder methods, and the primary-key column
/// listing. `render` is the only place the specification becomes tokens.
#[derive(Debug, Clone)]
pub struct ManagerSpec {
    pub dbms_name: String,
    pub schema_name: String,
    pub table_name: String,

    pub module_ident: Ident,
    pub entity_ident: Ident,
    pub fields_ident: Ident,
    pub manager_ident: Ident,

    /// Runtime trait the manager implements.
    pub supertype: TokenStream,

    /// Path prefix for runtime types in generated code.
    pub runtime: TokenStream,

    pub dependencies: Vec<DependencySpec>,
    pub accessors: Vec<AccessorSpec>,

    /// Indices into `accessors` of primary-key columns, declared order.
    pub primary_key: Vec<usize>,

    pub backward_finders: Vec<FinderSpec>,
    pub forward_finders: Vec<FinderSpec>,
    pub aggregates: Vec<FinderSpec>,

    /// Supertype impl methods, in emission order.
    pub table_body: Vec<MethodSpec>,
}

impl ManagerSpec {
    /// Import requirements of the generated file.
    pub fn imports(&self) -> Vec<TokenStream> {
        let rt = &self.runtime;
        let mut imports = vec![quote!(use #rt::Manager as _;)];

        for dep in &self.dependencies {
            let module = &dep.module_ident;
            let entity = &dep.entity_ident;
            let manager = &dep.manager_ty;
            imports.push(quote!(use super::#module::{#entity, #manager};));
        }

        imports
    }

    /// Renders the complete generated file.
    pub fn render(&self) -> TokenStream {
        let imports = self.imports();
        let entity = self.render_entity();
        let fields = self.render_fields_struct();
        let manager = self.render_manager();

        quote! {
            #(#imports)*

            #entity

            #fields

            #manager
        }
    }

    fn render_entity(&self) -> TokenStream {
        let entity_ident = &self.entity_ident;
        let fields_ident = &self.fields_ident;

        let field_decls = self.accessors.iter().map(|accessor| {
            let name = &accessor.getter;
            let ty = &accessor.entity_ty;

            if accessor.nullable {
                quote!(#name: Option<#ty>,)
            } else {
                quote!(#name: #ty,)
            }
        });

        let accessor_methods = self.accessors.iter().map(|accessor| {
            let getter = &accessor.getter;
            let setter = &accessor.setter;
            let ty = &accessor.entity_ty;

            if accessor.nullable {
                quote! {
                    pub fn #getter(&self) -> Option<&#ty> {
                        self.#getter.as_ref()
                    }

                    pub fn #setter(&mut self, value: Option<#ty>) -> &mut Self {
                        self.#getter = value;
                        self
                    }
                }
            } else {
                quote! {
                    pub fn #getter(&self) -> &#ty {
                        &self.#getter
                    }

                    pub fn #setter(&mut self, value: #ty) -> &mut Self {
                        self.#getter = value;
                        self
                    }
                }
            }
        });

        quote! {
            #[derive(Debug, Clone, Default, PartialEq)]
            pub struct #entity_ident {
                #(#field_decls)*
            }

            impl #entity_ident {
                #(#accessor_methods)*

                pub fn fields() -> #fields_ident {
                    #fields_ident
                }
            }
        }
    }

    fn render_fields_struct(&self) -> TokenStream {
        let rt = &self.runtime;
        let entity_ident = &self.entity_ident;
        let fields_ident = &self.fields_ident;

        let methods = self.accessors.iter().map(|accessor| {
            let getter = &accessor.getter;
            let ty = &accessor.entity_ty;
            let name = accessor.column_name.as_str();
            let ordinal = util::int(accessor.column_index);

            if accessor.nullable {
                quote! {
                    pub fn #getter(&self) -> #rt::Field<#entity_ident, Option<#ty>> {
                        #rt::Field::new(#name, #ordinal, |entity: &#entity_ident| {
                            entity.#getter().cloned()
                        })
                    }
                }
            } else {
                quote! {
                    pub fn #getter(&self) -> #rt::Field<#entity_ident, #ty> {
                        #rt::Field::new(#name, #ordinal, |entity: &#entity_ident| {
                            entity.#getter().clone()
                        })
                    }
                }
            }
        });

        quote! {
            pub struct #fields_ident;

            impl #fields_ident {
                #(#methods)*
            }
        }
    }

    fn render_manager(&self) -> TokenStream {
        let entity_ident = &self.entity_ident;
        let manager_ident = &self.manager_ident;
        let supertype = &self.supertype;

        let dep_fields = self.dependencies.iter().map(|dep| {
            let field = &dep.field_ident;
            let ty = &dep.manager_ty;
            quote!(#field: #ty,)
        });

        let ctor_params = self.dependencies.iter().map(|dep| {
            let field = &dep.field_ident;
            let ty = &dep.manager_ty;
            quote!(#field: #ty)
        });

        let ctor_fields = self.dependencies.iter().map(|dep| &dep.field_ident);

        let finder_methods = self
            .backward_finders
            .iter()
            .chain(&self.forward_finders)
            .chain(&self.aggregates)
            .flat_map(|finder| finder.methods.iter())
            .map(MethodSpec::render);

        let body_methods = self.table_body.iter().map(MethodSpec::render);

        quote! {
            pub struct #manager_ident {
                #(#dep_fields)*
            }

            impl #manager_ident {
                pub fn new(#(#ctor_params),*) -> #manager_ident {
                    #manager_ident { #(#ctor_fields),* }
                }

                #(#finder_methods)*
            }

            impl #supertype for #manager_ident {
                type Entity = #entity_ident;

                #(#body_methods)*
            }
        }
    }
}
