use crate::util;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use rowgen_core::engine::Engine;
use rowgen_core::schema::{Column, Table};
use rowgen_core::{Error, Result};

/// The resolved read path for one column: what Rust type lands in the
/// entity, and the full expression producing the setter argument.
#[derive(Debug, Clone)]
pub(crate) struct ReadSpec {
    /// Entity-side Rust type, before optional wrapping.
    pub entity_ty: TokenStream,

    /// Expression reading `row` at the column's position.
    pub read_expr: TokenStream,
}

/// Resolves a column against the engine's static accessor table.
///
/// The position is the column's ordinal in declared table order; row reads
/// are positional and 0-based.
pub(crate) fn resolve(
    table: &Table,
    column: &Column,
    engine: &Engine,
    position: usize,
    rt: &TokenStream,
) -> Result<ReadSpec> {
    let access = engine.row_access(&column.ty).ok_or_else(|| {
        Error::unmapped_column_type(
            &table.name,
            &column.name,
            column.ty.to_string(),
            engine.name,
        )
    })?;

    let accessor = format_ident!("{}", access.accessor);
    let pos = util::int(position);
    let context = format!("{}.{}", table.name, column.name);

    let raw = if column.nullable && access.primitive {
        // The bare accessor would decay NULL to the type's default value;
        // route the read through the generic null-safe wrapper instead.
        quote!(#rt::row_util::#accessor(row, #pos)?)
    } else if !column.nullable && !access.primitive {
        // Absence-capable accessor on a required column: a NULL here is a
        // database integrity defect, surfaced distinctly.
        quote!(#rt::row_util::required(row.#accessor(#pos)?, #context)?)
    } else {
        quote!(row.#accessor(#pos)?)
    };

    match &column.type_mapper {
        None => Ok(ReadSpec {
            entity_ty: util::ty(access.rust_ty)?,
            read_expr: raw,
        }),
        Some(mapper) => {
            let mapper_path = util::ty(&mapper.path)?;
            let entity_ty = util::ty(&mapper.entity_ty)?;

            let read_expr = if column.nullable {
                quote!(#raw.map(#mapper_path::to_entity))
            } else {
                quote!(#mapper_path::to_entity(#raw))
            };

            Ok(ReadSpec {
                entity_ty,
                read_expr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowgen_core::schema::{Type, TypeMapper};

    fn rt() -> TokenStream {
        quote!(rowgen::runtime)
    }

    fn normalized(tokens: &TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn required_primitive_reads_directly() {
        let table = Table::new("films");
        let column = Column::new("film_id", Type::Integer(8));

        let spec = resolve(&table, &column, &Engine::POSTGRESQL, 0, &rt()).unwrap();
        assert_eq!(normalized(&spec.read_expr), "row.i64(0)?");
        assert_eq!(normalized(&spec.entity_ty), "i64");
    }

    #[test]
    fn nullable_primitive_uses_null_safe_wrapper() {
        let table = Table::new("films");
        let column = Column::new("rating_id", Type::Integer(4)).nullable(true);

        let spec = resolve(&table, &column, &Engine::POSTGRESQL, 2, &rt()).unwrap();
        assert_eq!(
            normalized(&spec.read_expr),
            "rowgen::runtime::row_util::i32(row,2)?"
        );
    }

    #[test]
    fn nullable_object_reads_directly() {
        let table = Table::new("films");
        let column = Column::new("notes", Type::Text).nullable(true);

        let spec = resolve(&table, &column, &Engine::POSTGRESQL, 3, &rt()).unwrap();
        assert_eq!(normalized(&spec.read_expr), "row.string(3)?");
    }

    #[test]
    fn required_object_unwraps_with_context() {
        let table = Table::new("films");
        let column = Column::new("title", Type::VarChar(255));

        let spec = resolve(&table, &column, &Engine::POSTGRESQL, 1, &rt()).unwrap();
        assert_eq!(
            normalized(&spec.read_expr),
            "rowgen::runtime::row_util::required(row.string(1)?,\"films.title\")?"
        );
    }

    #[test]
    fn custom_mapper_wraps_the_raw_read() {
        let table = Table::new("films");
        let column = Column::new("rating", Type::VarChar(8))
            .with_mapper(TypeMapper::new("crate::mappers::MpaaMapper", "crate::model::Mpaa"));

        let spec = resolve(&table, &column, &Engine::POSTGRESQL, 4, &rt()).unwrap();
        assert_eq!(
            normalized(&spec.read_expr),
            "crate::mappers::MpaaMapper::to_entity(rowgen::runtime::row_util::required(row.string(4)?,\"films.rating\")?)"
        );
        assert_eq!(normalized(&spec.entity_ty), "crate::model::Mpaa");
    }

    #[test]
    fn nullable_custom_mapper_maps_through_option() {
        let table = Table::new("films");
        let column = Column::new("rating", Type::VarChar(8))
            .nullable(true)
            .with_mapper(TypeMapper::new("crate::mappers::MpaaMapper", "crate::model::Mpaa"));

        let spec = resolve(&table, &column, &Engine::POSTGRESQL, 4, &rt()).unwrap();
        assert_eq!(
            normalized(&spec.read_expr),
            "row.string(4)?.map(crate::mappers::MpaaMapper::to_entity)"
        );
    }

    #[test]
    fn unmapped_type_is_a_configuration_error() {
        let table = Table::new("films");
        let column = Column::new("rating", Type::Custom("mpaa".into()));

        let err = resolve(&table, &column, &Engine::SQLITE, 0, &rt()).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("CUSTOM(mpaa)"));
    }
}
