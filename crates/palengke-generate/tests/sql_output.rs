use std::fs;

use palengke_generate::{GenerateOptions, GenerationEngine, GenerationResult};

fn run(label: &str) -> (GenerationResult, String) {
    let mut out_dir = std::env::temp_dir();
    out_dir.push(format!("palengke_sql_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&out_dir).expect("create temp out dir");

    let options = GenerateOptions {
        out_dir: out_dir.clone(),
        ..GenerateOptions::default()
    };
    let result = GenerationEngine::new(options).run().expect("run generation");
    let sql = fs::read_to_string(out_dir.join("insert_market_data.sql")).expect("read sql file");
    (result, sql)
}

fn statement_count(sql: &str, table: &str) -> usize {
    let needle = format!("INSERT INTO public.{table} (");
    sql.lines().filter(|line| line.starts_with(&needle)).count()
}

#[test]
fn sections_appear_in_dependency_order() {
    let (_, sql) = run("sections");

    let titles = [
        "-- Insert Regions",
        "-- Insert Provinces",
        "-- Insert Cities",
        "-- Insert Barangays",
        "-- Insert Stores",
        "-- Insert Brands",
        "-- Insert SKUs",
        "-- Insert Customers",
        "-- Insert Transactions",
        "-- Insert Transaction Items",
        "-- Insert Substitution Events",
    ];
    let mut last = 0;
    for title in titles {
        let position = sql.find(title).unwrap_or_else(|| {
            panic!("missing section {title}");
        });
        assert!(position >= last, "section {title} out of order");
        last = position;
    }
}

#[test]
fn one_statement_per_record() {
    let (result, sql) = run("counts");
    let dataset = &result.dataset;

    assert_eq!(statement_count(&sql, "regions"), dataset.regions.len());
    assert_eq!(statement_count(&sql, "provinces"), dataset.provinces.len());
    assert_eq!(statement_count(&sql, "cities"), dataset.cities.len());
    assert_eq!(statement_count(&sql, "barangays"), dataset.barangays.len());
    assert_eq!(statement_count(&sql, "stores"), dataset.stores.len());
    assert_eq!(statement_count(&sql, "brands"), dataset.brands.len());
    assert_eq!(statement_count(&sql, "skus"), dataset.skus.len());
    assert_eq!(statement_count(&sql, "customers"), dataset.customers.len());
    assert_eq!(
        statement_count(&sql, "transactions"),
        dataset.transactions.len()
    );
    assert_eq!(
        statement_count(&sql, "transaction_items"),
        dataset.transaction_items.len()
    );
    assert_eq!(
        statement_count(&sql, "substitution_events"),
        dataset.substitution_events.len()
    );
}

#[test]
fn first_region_statement_is_exact() {
    let (_, sql) = run("first_region");
    assert!(sql.contains(
        "INSERT INTO public.regions (region_id, region_name) VALUES ('R01', 'Metro Manila');"
    ));
}

#[test]
fn string_literals_escape_embedded_quotes() {
    let (_, sql) = run("escaping");
    assert!(
        sql.contains("'Jack ''n Jill'"),
        "apostrophes must be doubled inside literals"
    );
    assert!(
        sql.contains("'Leslie''s'"),
        "apostrophes must be doubled inside literals"
    );
}

#[test]
fn booleans_and_numbers_are_unquoted() {
    let (_, sql) = run("literals");

    let item_line = sql
        .lines()
        .find(|line| line.starts_with("INSERT INTO public.transaction_items ("))
        .expect("at least one item statement");
    assert!(
        item_line.ends_with(", true);") || item_line.ends_with(", false);"),
        "promo flag should be an unquoted boolean: {item_line}"
    );

    let customer_line = sql
        .lines()
        .find(|line| line.starts_with("INSERT INTO public.customers ("))
        .expect("at least one customer statement");
    let values = customer_line
        .split("VALUES (")
        .nth(1)
        .expect("values clause");
    let age = values.split(", ").nth(2).expect("age field");
    assert!(
        age.parse::<u32>().is_ok(),
        "age should be an unquoted integer: {customer_line}"
    );
}
