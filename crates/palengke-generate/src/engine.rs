use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use palengke_core::{DATASET_VERSION, Dataset, validate_dataset};

use crate::catalog;
use crate::customers::generate_customers;
use crate::errors::GenerationError;
use crate::hierarchy::build_geography;
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::write_table;
use crate::output::sql::write_inserts;
use crate::products::build_catalog;
use crate::transactions::generate_transactions;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub dataset: Dataset,
    pub report: GenerationReport,
}

/// Entry point for generating and serializing the market dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline: expand the catalogs, draw the randomized
    /// sets, validate, and write every output into `out_dir`.
    ///
    /// All randomness comes from one ChaCha8 generator seeded once, so a
    /// given seed reproduces the same files byte for byte.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.validate_options()?;
        catalog::validate()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let out_dir = self.options.out_dir.clone();
        std::fs::create_dir_all(&out_dir)?;

        info!(
            run_id = %run_id,
            seed = self.options.seed,
            customers = self.options.customers,
            transactions = self.options.transactions,
            "generation started"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);
        let mut dataset = Dataset::default();

        let geography = build_geography(&mut rng)?;
        dataset.regions = geography.regions;
        dataset.provinces = geography.provinces;
        dataset.cities = geography.cities;
        dataset.barangays = geography.barangays;
        dataset.stores = geography.stores;
        info!(
            event = "hierarchy_built",
            regions = dataset.regions.len(),
            barangays = dataset.barangays.len(),
            stores = dataset.stores.len()
        );

        let (brands, skus) = build_catalog();
        dataset.brands = brands;
        dataset.skus = skus;
        info!(
            event = "catalog_built",
            brands = dataset.brands.len(),
            skus = dataset.skus.len()
        );

        dataset.customers =
            generate_customers(&mut rng, self.options.customers, &dataset.barangays)?;
        info!(event = "customers_drawn", customers = dataset.customers.len());

        let log = generate_transactions(
            &mut rng,
            &self.options,
            &dataset.stores,
            &dataset.customers,
            &dataset.skus,
        )?;
        dataset.transactions = log.transactions;
        dataset.transaction_items = log.items;
        dataset.substitution_events = log.substitutions;
        info!(
            event = "transactions_drawn",
            transactions = dataset.transactions.len(),
            items = dataset.transaction_items.len(),
            substitutions = dataset.substitution_events.len()
        );

        validate_dataset(&dataset)?;

        write_table(&out_dir, &dataset.regions)?;
        write_table(&out_dir, &dataset.provinces)?;
        write_table(&out_dir, &dataset.cities)?;
        write_table(&out_dir, &dataset.barangays)?;
        write_table(&out_dir, &dataset.stores)?;
        write_table(&out_dir, &dataset.brands)?;
        write_table(&out_dir, &dataset.skus)?;
        write_table(&out_dir, &dataset.customers)?;
        write_table(&out_dir, &dataset.transactions)?;
        write_table(&out_dir, &dataset.transaction_items)?;
        write_table(&out_dir, &dataset.substitution_events)?;
        write_inserts(&out_dir, &dataset)?;

        let report = build_report(run_id, self.options.seed, &dataset);
        std::fs::write(
            out_dir.join("generation_report.json"),
            serde_json::to_vec_pretty(&report)?,
        )?;

        info!(
            event = "run_finished",
            status = "success",
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(GenerationResult {
            out_dir,
            dataset,
            report,
        })
    }

    fn validate_options(&self) -> Result<(), GenerationError> {
        let options = &self.options;
        if options.transactions > 0 && options.customers == 0 {
            return Err(GenerationError::InvalidOptions(
                "cannot draw transactions without customers".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&options.substitution_rate) {
            return Err(GenerationError::InvalidOptions(format!(
                "substitution rate {} is not a probability",
                options.substitution_rate
            )));
        }
        Ok(())
    }
}

fn build_report(run_id: String, seed: u64, dataset: &Dataset) -> GenerationReport {
    GenerationReport {
        run_id,
        dataset_version: DATASET_VERSION.to_string(),
        seed,
        tables: dataset
            .table_counts()
            .into_iter()
            .map(|(table, rows)| TableReport {
                table: table.to_string(),
                rows,
            })
            .collect(),
        multi_item_transactions: dataset
            .transactions
            .iter()
            .filter(|transaction| transaction.basket_size > 1)
            .count() as u64,
    }
}
