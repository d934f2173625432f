use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use palengke_core::{Dataset, round_currency};
use palengke_generate::{GenerateOptions, GenerationEngine};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("palengke_invariants_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn generate(label: &str, seed: u64) -> Dataset {
    let options = GenerateOptions {
        out_dir: temp_out_dir(label),
        seed,
        ..GenerateOptions::default()
    };
    GenerationEngine::new(options)
        .run()
        .expect("run generation")
        .dataset
}

fn assert_id_format(id: &str, prefix: &str, width: usize) {
    let digits = id.strip_prefix(prefix).unwrap_or_else(|| {
        panic!("id {id} does not start with {prefix}");
    });
    assert_eq!(digits.len(), width, "id {id} has wrong digit width");
    assert!(
        digits.chars().all(|ch| ch.is_ascii_digit()),
        "id {id} has non-digit counter"
    );
}

#[test]
fn ids_follow_the_fixed_formats() {
    let dataset = generate("id_formats", 2025);

    for (id, prefix, width) in [
        (&dataset.regions[0].id, "R", 2),
        (&dataset.provinces[0].id, "P", 2),
        (&dataset.cities[0].id, "C", 3),
        (&dataset.barangays[0].id, "B", 4),
        (&dataset.stores[0].id, "S", 3),
        (&dataset.brands[0].id, "BR", 2),
        (&dataset.skus[0].id, "SKU", 3),
        (&dataset.customers[0].id, "CUST", 4),
        (&dataset.transactions[0].id, "TXN", 5),
        (&dataset.transaction_items[0].id, "TI", 5),
    ] {
        assert_id_format(id, prefix, width);
    }
    for event in &dataset.substitution_events {
        assert_id_format(&event.id, "SUB", 4);
    }
    for (index, customer) in dataset.customers.iter().enumerate() {
        assert_eq!(customer.id, format!("CUST{:04}", index + 1));
        assert_eq!(customer.device_id, format!("DEVICE{:04}", index + 1));
    }
}

#[test]
fn every_reference_points_to_a_generated_record() {
    let dataset = generate("references", 2025);

    let barangays: BTreeSet<&str> = dataset.barangays.iter().map(|b| b.id.as_str()).collect();
    let stores: BTreeSet<&str> = dataset.stores.iter().map(|s| s.id.as_str()).collect();
    let skus: BTreeSet<&str> = dataset.skus.iter().map(|s| s.id.as_str()).collect();
    let customers: BTreeSet<&str> = dataset.customers.iter().map(|c| c.id.as_str()).collect();
    let transactions: BTreeSet<&str> =
        dataset.transactions.iter().map(|t| t.id.as_str()).collect();

    for store in &dataset.stores {
        assert!(barangays.contains(store.barangay_id.as_str()));
    }
    for customer in &dataset.customers {
        assert!(barangays.contains(customer.barangay_id.as_str()));
    }
    for transaction in &dataset.transactions {
        assert!(stores.contains(transaction.store_id.as_str()));
        assert!(customers.contains(transaction.customer_id.as_str()));
    }
    for item in &dataset.transaction_items {
        assert!(transactions.contains(item.transaction_id.as_str()));
        assert!(skus.contains(item.sku_id.as_str()));
    }
}

#[test]
fn transaction_totals_match_their_items() {
    let dataset = generate("totals", 2025);

    let mut items_by_transaction: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for item in &dataset.transaction_items {
        assert!((1..=5).contains(&item.quantity));
        assert!((18.0..=130.0).contains(&item.price));
        items_by_transaction
            .entry(item.transaction_id.as_str())
            .or_default()
            .push(f64::from(item.quantity) * item.price);
    }

    for transaction in &dataset.transactions {
        assert!((1..=4).contains(&transaction.basket_size));
        let lines = items_by_transaction
            .get(transaction.id.as_str())
            .expect("items exist");
        assert_eq!(lines.len() as u32, transaction.basket_size);
        let total = round_currency(lines.iter().sum());
        assert!(
            (total - transaction.total_value).abs() < 1e-6,
            "transaction {} total {} != {}",
            transaction.id,
            transaction.total_value,
            total
        );
    }
}

#[test]
fn dates_stay_inside_the_window() {
    let dataset = generate("dates", 2025);

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let end = start + chrono::Duration::days(90);
    for transaction in &dataset.transactions {
        assert!(
            transaction.date >= start && transaction.date <= end,
            "date {} outside window",
            transaction.date
        );
    }
}

#[test]
fn substitutions_swap_distinct_skus_from_their_basket() {
    let dataset = generate("substitutions", 2025);

    let mut baskets: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for item in &dataset.transaction_items {
        baskets
            .entry(item.transaction_id.as_str())
            .or_default()
            .insert(item.sku_id.as_str());
    }

    for event in &dataset.substitution_events {
        assert_ne!(event.original_sku_id, event.substitute_sku_id);
        let basket = baskets
            .get(event.transaction_id.as_str())
            .expect("transaction has items");
        assert!(basket.contains(event.original_sku_id.as_str()));
        assert!(basket.contains(event.substitute_sku_id.as_str()));

        let transaction = dataset
            .transactions
            .iter()
            .find(|t| t.id == event.transaction_id)
            .expect("transaction exists");
        assert!(transaction.basket_size > 1);
        assert_eq!(event.date, transaction.date);
        assert!((1..=3).contains(&event.count));
    }
}

#[test]
fn substitution_rate_is_near_ten_percent_of_multi_item_baskets() {
    let dataset = generate("sub_rate", 2025);

    let multi_item = dataset
        .transactions
        .iter()
        .filter(|t| t.basket_size > 1)
        .count();
    let events = dataset.substitution_events.len();

    assert!(events <= multi_item);
    // ~10% of ~225 multi-item baskets
    assert!(
        (5..=45).contains(&events),
        "{events} events for {multi_item} multi-item baskets"
    );

    let mut seen = BTreeSet::new();
    for event in &dataset.substitution_events {
        assert!(
            seen.insert(event.transaction_id.as_str()),
            "transaction {} has more than one substitution",
            event.transaction_id
        );
    }
}

#[test]
fn customers_are_drawn_inside_their_bounds() {
    let dataset = generate("customers", 2025);

    for customer in &dataset.customers {
        assert!((18..=65).contains(&customer.age));
        assert!(customer.gender == "Male" || customer.gender == "Female");
    }
}
