use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level geographic unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    pub name: String,
}

/// Province tier. The source data maps exactly one province per region,
/// and downstream files depend on that duplication, so it is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub name: String,
    pub region_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub province_id: String,
}

/// Smallest administrative division, below city/municipality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barangay {
    pub id: String,
    pub name: String,
    pub city_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub barangay_id: String,
    pub address: String,
    pub size: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub category: String,
    pub parent_company: String,
}

/// Individual sellable product variant belonging to a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sku {
    pub id: String,
    pub name: String,
    pub brand_id: String,
    pub category: String,
    pub package_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub gender: String,
    pub age: u32,
    pub barangay_id: String,
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub store_id: String,
    pub customer_id: String,
    pub date: NaiveDate,
    /// Number of line items drawn for this basket.
    pub basket_size: u32,
    /// Sum of line totals, rounded to 2 decimals.
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionItem {
    pub id: String,
    pub transaction_id: String,
    pub sku_id: String,
    pub quantity: u32,
    pub price: f64,
    pub is_promo: bool,
}

/// A recorded swap of one SKU for another within the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionEvent {
    pub id: String,
    pub transaction_id: String,
    pub original_sku_id: String,
    pub substitute_sku_id: String,
    pub reason: String,
    pub count: u32,
    pub date: NaiveDate,
}

/// All record sets produced by one generation run, in build order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub regions: Vec<Region>,
    pub provinces: Vec<Province>,
    pub cities: Vec<City>,
    pub barangays: Vec<Barangay>,
    pub stores: Vec<Store>,
    pub brands: Vec<Brand>,
    pub skus: Vec<Sku>,
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub transaction_items: Vec<TransactionItem>,
    pub substitution_events: Vec<SubstitutionEvent>,
}

impl Dataset {
    /// Row counts per entity, in build order.
    pub fn table_counts(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("regions", self.regions.len() as u64),
            ("provinces", self.provinces.len() as u64),
            ("cities", self.cities.len() as u64),
            ("barangays", self.barangays.len() as u64),
            ("stores", self.stores.len() as u64),
            ("brands", self.brands.len() as u64),
            ("skus", self.skus.len() as u64),
            ("customers", self.customers.len() as u64),
            ("transactions", self.transactions.len() as u64),
            ("transaction_items", self.transaction_items.len() as u64),
            ("substitution_events", self.substitution_events.len() as u64),
        ]
    }
}

/// Round a monetary value to 2 decimals.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a latitude/longitude to 6 decimals.
pub fn round_coordinate(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
