#![allow(dead_code)]

use proc_macro2::TokenStream;
use rowgen_core::schema::{
    Column, DbSchema, Dbms, ForeignKey, PrimaryKey, Table, TableId, Type,
};
use rowgen_core::{EngineType, Project};

/// A small film-studio schema exercising every finder shape:
///
/// - `tags` has no foreign keys and nothing references it;
/// - `films` declares a nullable key to `ratings` and two keys (one
///   required, one nullable) into `people`;
/// - `people` is therefore reached backward through two distinct keys from
///   the same table, `ratings` through exactly one.
pub fn studio_project() -> Project {
    let mut people = Table::new("people");
    people.columns.push(Column::new("id", Type::Integer(8)));
    people
        .columns
        .push(Column::new("name", Type::VarChar(100)));
    people.primary_key = Some(PrimaryKey::new(["id"]));

    let mut ratings = Table::new("ratings");
    ratings.columns.push(Column::new("id", Type::Integer(4)));
    ratings.columns.push(Column::new("code", Type::VarChar(8)));
    ratings.primary_key = Some(PrimaryKey::new(["id"]));

    let mut films = Table::new("films");
    films.columns.push(Column::new("id", Type::Integer(8)));
    films
        .columns
        .push(Column::new("title", Type::VarChar(255)));
    films
        .columns
        .push(Column::new("rating_id", Type::Integer(4)).nullable(true));
    films
        .columns
        .push(Column::new("director_id", Type::Integer(8)));
    films
        .columns
        .push(Column::new("producer_id", Type::Integer(8)).nullable(true));
    films
        .columns
        .push(Column::new("release_date", Type::Date).nullable(true));
    films.primary_key = Some(PrimaryKey::new(["id"]));
    films
        .foreign_keys
        .push(ForeignKey::single("fk_films_rating", "rating_id", "ratings", "id"));
    films
        .foreign_keys
        .push(ForeignKey::single("fk_films_director", "director_id", "people", "id"));
    films
        .foreign_keys
        .push(ForeignKey::single("fk_films_producer", "producer_id", "people", "id"));

    let mut tags = Table::new("tags");
    tags.columns.push(Column::new("id", Type::Integer(4)));
    tags.columns.push(Column::new("name", Type::VarChar(64)));
    tags.primary_key = Some(PrimaryKey::new(["id"]));

    let mut schema = DbSchema::new("public");
    schema.tables.push(people);
    schema.tables.push(ratings);
    schema.tables.push(films);
    schema.tables.push(tags);

    let mut dbms = Dbms::new("studio", Some(EngineType::Postgresql));
    dbms.schemas.push(schema);

    Project::new(vec![dbms])
}

/// A table referencing itself: categories with an optional parent.
pub fn category_project() -> Project {
    let mut categories = Table::new("categories");
    categories.columns.push(Column::new("id", Type::Integer(4)));
    categories
        .columns
        .push(Column::new("name", Type::VarChar(64)));
    categories
        .columns
        .push(Column::new("parent_id", Type::Integer(4)).nullable(true));
    categories.primary_key = Some(PrimaryKey::new(["id"]));
    categories
        .foreign_keys
        .push(ForeignKey::single("fk_categories_parent", "parent_id", "categories", "id"));

    let mut schema = DbSchema::new("public");
    schema.tables.push(categories);

    let mut dbms = Dbms::new("catalog", Some(EngineType::Sqlite));
    dbms.schemas.push(schema);

    Project::new(vec![dbms])
}

pub fn table_id(project: &Project, name: &str) -> TableId {
    project
        .tables()
        .find(|table| table.name == name)
        .unwrap_or_else(|| panic!("no table named `{name}`"))
        .id
}

/// Token streams stringified without spacing, for shape assertions that do
/// not depend on token-level whitespace.
pub fn normalized(tokens: &TokenStream) -> String {
    tokens.to_string().replace(' ', "")
}
