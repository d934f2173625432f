use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use palengke_core::Dataset;

/// Name of the statement file.
pub const SQL_FILE_NAME: &str = "insert_market_data.sql";

/// Write one INSERT statement per record, grouped per entity in
/// dependency order so the file replays against an empty schema.
pub fn write_inserts(dir: &Path, dataset: &Dataset) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(dir.join(SQL_FILE_NAME))?);

    writeln!(out, "-- Insert Regions")?;
    for region in &dataset.regions {
        writeln!(
            out,
            "INSERT INTO public.regions (region_id, region_name) VALUES ({}, {});",
            quote(&region.id),
            quote(&region.name)
        )?;
    }

    section(&mut out, "Provinces")?;
    for province in &dataset.provinces {
        writeln!(
            out,
            "INSERT INTO public.provinces (province_id, province_name, region_id) VALUES ({}, {}, {});",
            quote(&province.id),
            quote(&province.name),
            quote(&province.region_id)
        )?;
    }

    section(&mut out, "Cities")?;
    for city in &dataset.cities {
        writeln!(
            out,
            "INSERT INTO public.cities (city_id, city_name, province_id) VALUES ({}, {}, {});",
            quote(&city.id),
            quote(&city.name),
            quote(&city.province_id)
        )?;
    }

    section(&mut out, "Barangays")?;
    for barangay in &dataset.barangays {
        writeln!(
            out,
            "INSERT INTO public.barangays (barangay_id, barangay_name, city_id, latitude, longitude) VALUES ({}, {}, {}, {:.6}, {:.6});",
            quote(&barangay.id),
            quote(&barangay.name),
            quote(&barangay.city_id),
            barangay.latitude,
            barangay.longitude
        )?;
    }

    section(&mut out, "Stores")?;
    for store in &dataset.stores {
        writeln!(
            out,
            "INSERT INTO public.stores (store_id, store_name, barangay_id, address, size, latitude, longitude) VALUES ({}, {}, {}, {}, {}, {:.6}, {:.6});",
            quote(&store.id),
            quote(&store.name),
            quote(&store.barangay_id),
            quote(&store.address),
            quote(&store.size),
            store.latitude,
            store.longitude
        )?;
    }

    section(&mut out, "Brands")?;
    for brand in &dataset.brands {
        writeln!(
            out,
            "INSERT INTO public.brands (brand_id, brand_name, category, parent_company) VALUES ({}, {}, {}, {});",
            quote(&brand.id),
            quote(&brand.name),
            quote(&brand.category),
            quote(&brand.parent_company)
        )?;
    }

    section(&mut out, "SKUs")?;
    for sku in &dataset.skus {
        writeln!(
            out,
            "INSERT INTO public.skus (sku_id, sku_name, brand_id, category, package_type) VALUES ({}, {}, {}, {}, {});",
            quote(&sku.id),
            quote(&sku.name),
            quote(&sku.brand_id),
            quote(&sku.category),
            quote(&sku.package_type)
        )?;
    }

    section(&mut out, "Customers")?;
    for customer in &dataset.customers {
        writeln!(
            out,
            "INSERT INTO public.customers (customer_id, gender, age, barangay_id, device_id) VALUES ({}, {}, {}, {}, {});",
            quote(&customer.id),
            quote(&customer.gender),
            customer.age,
            quote(&customer.barangay_id),
            quote(&customer.device_id)
        )?;
    }

    section(&mut out, "Transactions")?;
    for transaction in &dataset.transactions {
        writeln!(
            out,
            "INSERT INTO public.transactions (transaction_id, store_id, customer_id, transaction_date, basket_size, total_value) VALUES ({}, {}, {}, {}, {}, {:.2});",
            quote(&transaction.id),
            quote(&transaction.store_id),
            quote(&transaction.customer_id),
            quote(&transaction.date.format("%Y-%m-%d").to_string()),
            transaction.basket_size,
            transaction.total_value
        )?;
    }

    section(&mut out, "Transaction Items")?;
    for item in &dataset.transaction_items {
        writeln!(
            out,
            "INSERT INTO public.transaction_items (transaction_item_id, transaction_id, sku_id, quantity, price, is_promo) VALUES ({}, {}, {}, {}, {:.2}, {});",
            quote(&item.id),
            quote(&item.transaction_id),
            quote(&item.sku_id),
            item.quantity,
            item.price,
            item.is_promo
        )?;
    }

    section(&mut out, "Substitution Events")?;
    for event in &dataset.substitution_events {
        writeln!(
            out,
            "INSERT INTO public.substitution_events (substitution_id, transaction_id, original_sku_id, substitute_sku_id, reason, count, timestamp) VALUES ({}, {}, {}, {}, {}, {}, {});",
            quote(&event.id),
            quote(&event.transaction_id),
            quote(&event.original_sku_id),
            quote(&event.substitute_sku_id),
            quote(&event.reason),
            event.count,
            quote(&event.date.format("%Y-%m-%d").to_string())
        )?;
    }

    out.flush()
}

fn section(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "-- Insert {title}")
}

/// Single-quoted SQL string literal, embedded quotes doubled.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(quote("Jack 'n Jill"), "'Jack ''n Jill'");
        assert_eq!(quote("Metro Manila"), "'Metro Manila'");
    }
}
