use proc_macro2::Ident;
use quote::format_ident;
use rowgen_core::schema::{pluralize, singularize, Column, Name, Table};

/// Identifiers generated for one table.
///
/// Every name is a pure function of the table name; two runs over the same
/// document always derive the same identifiers. Tables whose names differ
/// only in case or pluralization can collide; that is a documented
/// limitation of schema-driven naming, not detected here.
#[derive(Debug, Clone)]
pub(crate) struct TableNames {
    /// Entity struct, e.g. `Film`
    pub entity_ident: Ident,

    /// Field descriptor struct, e.g. `FilmFields`
    pub fields_ident: Ident,

    /// Manager struct, e.g. `FilmManager`
    pub manager_ident: Ident,

    /// Module (and file) name, e.g. `film`
    pub module_ident: Ident,

    /// Manager dependency field, e.g. `film_manager`
    pub dep_field_ident: Ident,
}

impl TableNames {
    pub(crate) fn for_table(table: &Table) -> TableNames {
        let singular = Name::new(&singularize(&table.name));
        let entity = singular.upper_camel_case();
        let snake = singular.snake_case();

        TableNames {
            entity_ident: format_ident!("{entity}"),
            fields_ident: format_ident!("{entity}Fields"),
            manager_ident: format_ident!("{entity}Manager"),
            module_ident: format_ident!("{snake}"),
            dep_field_ident: format_ident!("{snake}_manager"),
        }
    }
}

pub(crate) fn getter_ident(column: &Column) -> Ident {
    format_ident!("{}", Name::new(&column.name).snake_case())
}

pub(crate) fn setter_ident(column: &Column) -> Ident {
    format_ident!("set_{}", Name::new(&column.name).snake_case())
}

/// Forward finder, named after the local column: `find_rating_id`.
pub(crate) fn forward_finder_ident(local_column: &str) -> Ident {
    format_ident!("find_{}", Name::new(local_column).snake_case())
}

/// Backward finder, named after the pluralized referencing table and the
/// referencing column so two keys from one table stay distinguishable:
/// `find_films_by_rating_id`.
pub(crate) fn backward_finder_ident(referencing_table: &str, referencing_column: &str) -> Ident {
    format_ident!(
        "find_{}_by_{}",
        plural_snake(referencing_table),
        Name::new(referencing_column).snake_case()
    )
}

/// Descriptor-returning companion of a backward finder:
/// `films_by_rating_id_finder`.
pub(crate) fn backward_companion_ident(referencing_table: &str, referencing_column: &str) -> Ident {
    format_ident!(
        "{}_by_{}_finder",
        plural_snake(referencing_table),
        Name::new(referencing_column).snake_case()
    )
}

/// Aggregate streamer over every key from one referencing table:
/// `find_films`.
pub(crate) fn aggregate_finder_ident(referencing_table: &str) -> Ident {
    format_ident!("find_{}", plural_snake(referencing_table))
}

fn plural_snake(table_name: &str) -> String {
    Name::new(&pluralize(&singularize(table_name))).snake_case()
}
