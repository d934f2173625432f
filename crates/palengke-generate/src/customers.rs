use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use palengke_core::{Barangay, Customer, IdSequence};

use crate::catalog::GENDERS;
use crate::errors::GenerationError;

/// Draw the synthetic customer roster.
///
/// Device IDs share the customer's ordinal, so `CUST0042` always carries
/// `DEVICE0042`.
pub fn generate_customers(
    rng: &mut ChaCha8Rng,
    count: u32,
    barangays: &[Barangay],
) -> Result<Vec<Customer>, GenerationError> {
    let mut customer_ids = IdSequence::new("CUST", 4);
    let mut device_ids = IdSequence::new("DEVICE", 4);
    let mut customers = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let barangay = barangays.choose(rng).ok_or_else(|| {
            GenerationError::InvalidCatalog("no barangays to assign customers to".to_string())
        })?;
        customers.push(Customer {
            id: customer_ids.next_id(),
            gender: GENDERS
                .choose(rng)
                .copied()
                .unwrap_or("Female")
                .to_string(),
            age: rng.random_range(18..=65),
            barangay_id: barangay.id.clone(),
            device_id: device_ids.next_id(),
        });
    }

    Ok(customers)
}
