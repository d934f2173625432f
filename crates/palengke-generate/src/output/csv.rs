use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use palengke_core::{
    Barangay, Brand, City, Customer, Province, Region, Sku, Store, SubstitutionEvent, Transaction,
    TransactionItem,
};

/// One entity's tabular projection: its fixed file name, header row, and
/// per-record cells in header order.
pub trait Tabular {
    const FILE_NAME: &'static str;
    const HEADER: &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Write one entity file: header row, then one row per record.
pub fn write_table<T: Tabular>(dir: &Path, rows: &[T]) -> Result<(), csv::Error> {
    let file = File::create(dir.join(T::FILE_NAME)).map_err(csv::Error::from)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(T::HEADER)?;
    for row in rows {
        writer.write_record(row.row())?;
    }
    writer.flush()?;
    Ok(())
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn coordinate(value: f64) -> String {
    format!("{value:.6}")
}

fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

impl Tabular for Region {
    const FILE_NAME: &'static str = "regions.csv";
    const HEADER: &'static [&'static str] = &["RegionID", "RegionName"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

impl Tabular for Province {
    const FILE_NAME: &'static str = "provinces.csv";
    const HEADER: &'static [&'static str] = &["ProvinceID", "ProvinceName", "RegionID"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.region_id.clone()]
    }
}

impl Tabular for City {
    const FILE_NAME: &'static str = "cities.csv";
    const HEADER: &'static [&'static str] = &["CityID", "CityName", "ProvinceID"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.province_id.clone()]
    }
}

impl Tabular for Barangay {
    const FILE_NAME: &'static str = "barangays.csv";
    const HEADER: &'static [&'static str] =
        &["BarangayID", "BarangayName", "CityID", "Latitude", "Longitude"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.city_id.clone(),
            coordinate(self.latitude),
            coordinate(self.longitude),
        ]
    }
}

impl Tabular for Store {
    const FILE_NAME: &'static str = "stores.csv";
    const HEADER: &'static [&'static str] = &[
        "StoreID",
        "StoreName",
        "BarangayID",
        "Address",
        "Size",
        "Latitude",
        "Longitude",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.barangay_id.clone(),
            self.address.clone(),
            self.size.clone(),
            coordinate(self.latitude),
            coordinate(self.longitude),
        ]
    }
}

impl Tabular for Brand {
    const FILE_NAME: &'static str = "brands.csv";
    const HEADER: &'static [&'static str] =
        &["BrandID", "BrandName", "Category", "ParentCompany"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.parent_company.clone(),
        ]
    }
}

impl Tabular for Sku {
    const FILE_NAME: &'static str = "skus.csv";
    const HEADER: &'static [&'static str] =
        &["SKUID", "SKUName", "BrandID", "Category", "PackageType"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.brand_id.clone(),
            self.category.clone(),
            self.package_type.clone(),
        ]
    }
}

impl Tabular for Customer {
    const FILE_NAME: &'static str = "customers.csv";
    const HEADER: &'static [&'static str] =
        &["CustomerID", "Gender", "Age", "BarangayID", "DeviceID"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.gender.clone(),
            self.age.to_string(),
            self.barangay_id.clone(),
            self.device_id.clone(),
        ]
    }
}

impl Tabular for Transaction {
    const FILE_NAME: &'static str = "transactions.csv";
    const HEADER: &'static [&'static str] = &[
        "TransactionID",
        "StoreID",
        "CustomerID",
        "TransactionDate",
        "BasketSize",
        "TotalValue",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.store_id.clone(),
            self.customer_id.clone(),
            date(self.date),
            self.basket_size.to_string(),
            money(self.total_value),
        ]
    }
}

impl Tabular for TransactionItem {
    const FILE_NAME: &'static str = "transaction_items.csv";
    const HEADER: &'static [&'static str] = &[
        "TransactionItemID",
        "TransactionID",
        "SKUID",
        "Quantity",
        "Price",
        "IsPromo",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.transaction_id.clone(),
            self.sku_id.clone(),
            self.quantity.to_string(),
            money(self.price),
            self.is_promo.to_string(),
        ]
    }
}

impl Tabular for SubstitutionEvent {
    const FILE_NAME: &'static str = "substitution_events.csv";
    const HEADER: &'static [&'static str] = &[
        "SubstitutionID",
        "TransactionID",
        "OriginalSKUID",
        "SubstituteSKUID",
        "Reason",
        "Count",
        "Date",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.transaction_id.clone(),
            self.original_sku_id.clone(),
            self.substitute_sku_id.clone(),
            self.reason.clone(),
            self.count.to_string(),
            date(self.date),
        ]
    }
}
