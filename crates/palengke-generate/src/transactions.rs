use chrono::Duration;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use palengke_core::{
    Customer, IdSequence, Sku, Store, SubstitutionEvent, Transaction, TransactionItem,
    round_currency,
};

use crate::catalog::SUBSTITUTION_REASONS;
use crate::errors::GenerationError;
use crate::model::GenerateOptions;

/// Price band for a basket line, rounded to 2 decimals.
const PRICE_BAND: (f64, f64) = (18.0, 130.0);

/// The randomized transaction log: transactions, their line items, and
/// the occasional substitution event.
#[derive(Debug, Default)]
pub struct TransactionLog {
    pub transactions: Vec<Transaction>,
    pub items: Vec<TransactionItem>,
    pub substitutions: Vec<SubstitutionEvent>,
}

/// Draw the transaction log against the already-built reference sets.
///
/// Per transaction: a date inside the configured window, a store, a
/// customer, and 1-4 basket lines. A substitution event fires with the
/// configured probability, only on baskets holding more than one line,
/// and swaps two distinct SKUs from that basket. Sequence counters stay
/// monotonic across the whole run.
pub fn generate_transactions(
    rng: &mut ChaCha8Rng,
    options: &GenerateOptions,
    stores: &[Store],
    customers: &[Customer],
    skus: &[Sku],
) -> Result<TransactionLog, GenerationError> {
    let mut transaction_ids = IdSequence::new("TXN", 5);
    let mut item_ids = IdSequence::new("TI", 5);
    let mut substitution_ids = IdSequence::new("SUB", 4);
    let mut log = TransactionLog::default();

    for _ in 0..options.transactions {
        let date = options.start_date
            + Duration::days(rng.random_range(0..=i64::from(options.window_days)));
        let store = stores.choose(rng).ok_or_else(|| {
            GenerationError::InvalidCatalog("no stores to draw transactions from".to_string())
        })?;
        let customer = customers.choose(rng).ok_or_else(|| {
            GenerationError::InvalidCatalog("no customers to draw transactions from".to_string())
        })?;
        let basket_size: u32 = rng.random_range(1..=4);
        let transaction_id = transaction_ids.next_id();

        let mut basket_skus: Vec<String> = Vec::with_capacity(basket_size as usize);
        let mut basket_value = 0.0;
        for _ in 0..basket_size {
            let sku = skus.choose(rng).ok_or_else(|| {
                GenerationError::InvalidCatalog("no SKUs to draw basket lines from".to_string())
            })?;
            let quantity: u32 = rng.random_range(1..=5);
            let price = round_currency(rng.random_range(PRICE_BAND.0..PRICE_BAND.1));
            basket_value += f64::from(quantity) * price;
            basket_skus.push(sku.id.clone());
            log.items.push(TransactionItem {
                id: item_ids.next_id(),
                transaction_id: transaction_id.clone(),
                sku_id: sku.id.clone(),
                quantity,
                price,
                is_promo: rng.random_bool(0.5),
            });
        }

        log.transactions.push(Transaction {
            id: transaction_id.clone(),
            store_id: store.id.clone(),
            customer_id: customer.id.clone(),
            date,
            basket_size,
            total_value: round_currency(basket_value),
        });

        // The roll is drawn for every transaction, multi-item or not, so
        // the rng stream does not depend on basket shape.
        let roll = rng.random_bool(options.substitution_rate);
        if roll && basket_skus.len() > 1 {
            if let Some((original, substitute)) = pick_swap_pair(rng, &basket_skus) {
                log.substitutions.push(SubstitutionEvent {
                    id: substitution_ids.next_id(),
                    transaction_id: transaction_id.clone(),
                    original_sku_id: original,
                    substitute_sku_id: substitute,
                    reason: SUBSTITUTION_REASONS
                        .choose(rng)
                        .copied()
                        .unwrap_or("Preference")
                        .to_string(),
                    count: rng.random_range(1..=3),
                    date,
                });
            }
        }
    }

    Ok(log)
}

/// Pick two distinct SKUs from a basket, or `None` when every line holds
/// the same SKU (a swap must reference two different products).
fn pick_swap_pair(rng: &mut ChaCha8Rng, basket_skus: &[String]) -> Option<(String, String)> {
    let mut distinct: Vec<&String> = Vec::with_capacity(basket_skus.len());
    for sku_id in basket_skus {
        if !distinct.contains(&sku_id) {
            distinct.push(sku_id);
        }
    }
    if distinct.len() < 2 {
        return None;
    }
    let pair: Vec<&&String> = distinct.choose_multiple(rng, 2).collect();
    Some(((*pair[0]).clone(), (*pair[1]).clone()))
}
