mod support;

use support::{category_project, normalized, studio_project, table_id};

use pretty_assertions::assert_eq;
use rowgen_codegen::generate_table;

fn render(table: &str) -> proc_macro2::TokenStream {
    let project = studio_project();
    generate_table(&project, table_id(&project, table))
        .unwrap()
        .render()
}

fn parse(tokens: &proc_macro2::TokenStream) -> syn::File {
    syn::parse2(tokens.clone()).expect("generated file must parse as Rust")
}

fn inherent_method_names(file: &syn::File, self_ty: &str) -> Vec<String> {
    for item in &file.items {
        let syn::Item::Impl(item) = item else {
            continue;
        };
        if item.trait_.is_some() {
            continue;
        }
        let syn::Type::Path(path) = item.self_ty.as_ref() else {
            continue;
        };
        if !path.path.is_ident(self_ty) {
            continue;
        }

        return item
            .items
            .iter()
            .filter_map(|item| match item {
                syn::ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
                _ => None,
            })
            .collect();
    }

    panic!("no inherent impl for `{self_ty}`");
}

fn trait_impl_method_names(file: &syn::File, self_ty: &str) -> Vec<String> {
    for item in &file.items {
        let syn::Item::Impl(item) = item else {
            continue;
        };
        if item.trait_.is_none() {
            continue;
        }
        let syn::Type::Path(path) = item.self_ty.as_ref() else {
            continue;
        };
        if !path.path.is_ident(self_ty) {
            continue;
        }

        return item
            .items
            .iter()
            .filter_map(|item| match item {
                syn::ImplItem::Fn(method) => Some(method.sig.ident.to_string()),
                _ => None,
            })
            .collect();
    }

    panic!("no trait impl for `{self_ty}`");
}

#[test]
fn generated_file_parses_and_declares_the_expected_items() {
    let file = parse(&render("films"));

    let structs: Vec<_> = file
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(item) => Some(item.ident.to_string()),
            _ => None,
        })
        .collect();

    assert_eq!(structs, vec!["Film", "FilmFields", "FilmManager"]);
}

#[test]
fn manager_methods_follow_phase_order() {
    let file = parse(&render("people"));

    assert_eq!(
        inherent_method_names(&file, "PersonManager"),
        vec![
            "new",
            "find_films_by_director_id",
            "films_by_director_id_finder",
            "find_films_by_producer_id",
            "films_by_producer_id_finder",
            "find_films",
        ]
    );

    assert_eq!(
        trait_impl_method_names(&file, "PersonManager"),
        vec![
            "create_support",
            "dbms_name",
            "schema_name",
            "table_name",
            "entity_from_row",
            "new_empty_entity",
            "fields",
            "primary_key_fields",
            "new_copy_of",
        ]
    );
}

#[test]
fn row_construction_reads_columns_positionally_in_declared_order() {
    let code = normalized(&render("films"));

    // Declared order: id, title, rating_id, director_id, producer_id,
    // release_date; positions 0..=5 regardless of types or key membership.
    let reads = [
        "entity.set_id(row.i64(0)?);",
        "entity.set_title(rowgen::runtime::row_util::required(row.string(1)?,\"films.title\")?);",
        "entity.set_rating_id(rowgen::runtime::row_util::i32(row,2)?);",
        "entity.set_director_id(row.i64(3)?);",
        "entity.set_producer_id(rowgen::runtime::row_util::i64(row,4)?);",
        "entity.set_release_date(row.date(5)?);",
    ];

    let mut last = 0;
    for read in reads {
        let at = code[last..]
            .find(read)
            .unwrap_or_else(|| panic!("missing or out of order: {read}"));
        last += at;
    }
}

#[test]
fn nullable_primitive_column_never_uses_the_bare_accessor() {
    let code = normalized(&render("films"));

    assert!(code.contains("rowgen::runtime::row_util::i32(row,2)?"));
    assert!(!code.contains("row.i32(2)"));
}

#[test]
fn optional_forward_finder_short_circuits_before_querying() {
    let code = normalized(&render("films"));

    let start = code.find("fnfind_rating_id").unwrap();
    let body = &code[start..code[start..].find("fnfind_director_id").unwrap() + start];

    assert!(body.contains("letSome(value)=entity.rating_id()else{returnOk(None);};"));

    let early_return = body.find("returnOk(None)").unwrap();
    let query = body.find(".stream()").unwrap();
    assert!(early_return < query);

    assert!(body.contains(
        "self.rating_manager.stream()?.filter(Rating::fields().id().equal(value.clone())).first()"
    ));
}

#[test]
fn required_forward_finder_raises_the_distinct_integrity_error() {
    let tokens = render("films");
    let code = tokens.to_string();

    let start = code.find("fn find_director_id").unwrap();
    let body = &code[start..code[start..].find("fn find_producer_id").unwrap() + start];

    assert!(body.contains("integrity_violation"));
    assert!(body.contains("films.director_id"));
    assert!(body.contains("people.id"));
    assert!(!body.contains("Ok (None)"));
}

#[test]
fn backward_finder_delegates_to_its_descriptor_companion() {
    let code = normalized(&render("ratings"));

    assert!(code.contains(
        "pubfnfind_films_by_rating_id(&self,entity:&Rating)->rowgen::runtime::Result<rowgen::runtime::EntityStream<Film>>{self.films_by_rating_id_finder().apply(entity)}"
    ));
    assert!(code.contains(
        "pubfnfilms_by_rating_id_finder(&self)->rowgen::runtime::BackwardFinder<Rating,Film>{Film::fields().rating_id().backward_finder(&self.film_manager)}"
    ));
}

#[test]
fn aggregate_unions_every_per_key_stream_distinctly() {
    let code = normalized(&render("people"));

    assert!(code.contains(
        "Ok(rowgen::runtime::stream::union_distinct([self.find_films_by_director_id(entity)?,self.find_films_by_producer_id(entity)?]))"
    ));

    // Distinct union relies on entity equality; the entity must derive it.
    assert!(normalized(&render("films")).contains("#[derive(Debug,Clone,Default,PartialEq)]"));
}

#[test]
fn copy_construction_skips_absent_optional_values() {
    let code = normalized(&render("films"));

    let start = code.find("fnnew_copy_of").unwrap();
    let body = &code[start..];

    assert!(body.contains("copy.set_title(source.title().clone());"));
    assert!(body.contains(
        "ifletSome(value)=source.rating_id(){copy.set_rating_id(Some(value.clone()));}"
    ));
    assert!(!body.contains("copy.set_rating_id(None)"));
}

#[test]
fn identity_accessors_name_the_schema_location() {
    let code = normalized(&render("films"));

    assert!(code.contains("fndbms_name(&self)->&'staticstr{\"studio\"}"));
    assert!(code.contains("fnschema_name(&self)->&'staticstr{\"public\"}"));
    assert!(code.contains("fntable_name(&self)->&'staticstr{\"films\"}"));
}

#[test]
fn field_listings_cover_all_and_primary_key_columns() {
    let code = normalized(&render("films"));

    assert!(code.contains(
        "fnfields(&self)->Vec<rowgen::runtime::DynField<Film>>{vec![Film::fields().id().erased(),Film::fields().title().erased(),Film::fields().rating_id().erased(),Film::fields().director_id().erased(),Film::fields().producer_id().erased(),Film::fields().release_date().erased()]}"
    ));
    assert!(code.contains(
        "fnprimary_key_fields(&self)->Vec<rowgen::runtime::DynField<Film>>{vec![Film::fields().id().erased()]}"
    ));
}

#[test]
fn dependencies_are_imported_from_sibling_modules() {
    let code = normalized(&render("films"));

    assert!(code.contains("userowgen::runtime::Manageras_;"));
    assert!(code.contains("usesuper::rating::{Rating,RatingManager};"));
    assert!(code.contains("usesuper::person::{Person,PersonManager};"));

    assert!(code.contains("pubfnnew(rating_manager:RatingManager,person_manager:PersonManager)->FilmManager"));
}

#[test]
fn self_referencing_key_queries_through_self() {
    let project = category_project();
    let code = normalized(
        &generate_table(&project, table_id(&project, "categories"))
            .unwrap()
            .render(),
    );

    assert!(code.contains("self.stream()?.filter(Category::fields().id().equal(value.clone())).first()"));
    assert!(code.contains("Category::fields().parent_id().backward_finder(self)"));
    assert!(!code.contains("category_manager"));
}
