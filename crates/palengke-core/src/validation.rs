use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::records::{Dataset, round_currency};

/// Validate internal consistency of a generated dataset.
///
/// This checks:
/// - every foreign reference points to a generated record
/// - transaction totals equal the sum of their item totals
/// - basket sizes match the number of item rows
/// - substitution events reference two distinct SKUs from their own basket
pub fn validate_dataset(dataset: &Dataset) -> Result<()> {
    let regions = id_set(dataset.regions.iter().map(|r| r.id.as_str()), "region")?;
    let provinces = id_set(dataset.provinces.iter().map(|p| p.id.as_str()), "province")?;
    let cities = id_set(dataset.cities.iter().map(|c| c.id.as_str()), "city")?;
    let barangays = id_set(dataset.barangays.iter().map(|b| b.id.as_str()), "barangay")?;
    let stores = id_set(dataset.stores.iter().map(|s| s.id.as_str()), "store")?;
    let brands = id_set(dataset.brands.iter().map(|b| b.id.as_str()), "brand")?;
    let skus = id_set(dataset.skus.iter().map(|s| s.id.as_str()), "sku")?;
    let customers = id_set(dataset.customers.iter().map(|c| c.id.as_str()), "customer")?;
    let transactions = id_set(
        dataset.transactions.iter().map(|t| t.id.as_str()),
        "transaction",
    )?;

    for province in &dataset.provinces {
        require(&regions, &province.region_id, "province", &province.id)?;
    }
    for city in &dataset.cities {
        require(&provinces, &city.province_id, "city", &city.id)?;
    }
    for barangay in &dataset.barangays {
        require(&cities, &barangay.city_id, "barangay", &barangay.id)?;
    }
    for store in &dataset.stores {
        require(&barangays, &store.barangay_id, "store", &store.id)?;
    }
    for sku in &dataset.skus {
        require(&brands, &sku.brand_id, "sku", &sku.id)?;
    }
    for customer in &dataset.customers {
        require(&barangays, &customer.barangay_id, "customer", &customer.id)?;
    }
    for transaction in &dataset.transactions {
        require(&stores, &transaction.store_id, "transaction", &transaction.id)?;
        require(
            &customers,
            &transaction.customer_id,
            "transaction",
            &transaction.id,
        )?;
    }

    let mut items_by_transaction: BTreeMap<&str, Vec<&crate::records::TransactionItem>> =
        BTreeMap::new();
    for item in &dataset.transaction_items {
        require(&transactions, &item.transaction_id, "item", &item.id)?;
        require(&skus, &item.sku_id, "item", &item.id)?;
        items_by_transaction
            .entry(item.transaction_id.as_str())
            .or_default()
            .push(item);
    }

    for transaction in &dataset.transactions {
        let items = items_by_transaction
            .get(transaction.id.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        if items.len() as u32 != transaction.basket_size {
            return Err(Error::InvalidDataset(format!(
                "transaction {} has basket size {} but {} item rows",
                transaction.id,
                transaction.basket_size,
                items.len()
            )));
        }

        let total = round_currency(
            items
                .iter()
                .map(|item| f64::from(item.quantity) * item.price)
                .sum(),
        );
        if (total - transaction.total_value).abs() > 1e-6 {
            return Err(Error::InvalidDataset(format!(
                "transaction {} total {} does not match item sum {}",
                transaction.id, transaction.total_value, total
            )));
        }
    }

    for event in &dataset.substitution_events {
        require(&transactions, &event.transaction_id, "substitution", &event.id)?;
        if event.original_sku_id == event.substitute_sku_id {
            return Err(Error::InvalidDataset(format!(
                "substitution {} swaps SKU {} with itself",
                event.id, event.original_sku_id
            )));
        }
        let basket: BTreeSet<&str> = items_by_transaction
            .get(event.transaction_id.as_str())
            .map(|items| items.iter().map(|item| item.sku_id.as_str()).collect())
            .unwrap_or_default();
        for sku_id in [&event.original_sku_id, &event.substitute_sku_id] {
            if !basket.contains(sku_id.as_str()) {
                return Err(Error::InvalidDataset(format!(
                    "substitution {} references SKU {} outside transaction {}",
                    event.id, sku_id, event.transaction_id
                )));
            }
        }
    }

    Ok(())
}

fn id_set<'a>(
    ids: impl Iterator<Item = &'a str>,
    entity: &str,
) -> Result<BTreeSet<&'a str>> {
    let mut set = BTreeSet::new();
    for id in ids {
        if !set.insert(id) {
            return Err(Error::InvalidDataset(format!(
                "duplicate {entity} id: {id}"
            )));
        }
    }
    Ok(set)
}

fn require(
    set: &BTreeSet<&str>,
    id: &str,
    entity: &str,
    owner: &str,
) -> Result<()> {
    if set.contains(id) {
        Ok(())
    } else {
        Err(Error::InvalidDataset(format!(
            "{entity} {owner} references missing id: {id}"
        )))
    }
}
