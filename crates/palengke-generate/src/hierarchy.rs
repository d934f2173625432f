use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use palengke_core::{
    Barangay, City, IdSequence, Province, Region, Store, round_coordinate,
};

use crate::catalog::{BARANGAY_NAMES, BARANGAYS_PER_CITY, REGIONS, RETAIL_CHAINS, STORE_SIZES};
use crate::errors::GenerationError;

/// Latitude band the synthesized coordinates fall in.
const LAT_BAND: (f64, f64) = (14.0, 15.0);
/// Longitude band the synthesized coordinates fall in.
const LNG_BAND: (f64, f64) = (120.0, 122.0);

/// Geographic record sets, in build order.
#[derive(Debug, Default)]
pub struct Geography {
    pub regions: Vec<Region>,
    pub provinces: Vec<Province>,
    pub cities: Vec<City>,
    pub barangays: Vec<Barangay>,
    pub stores: Vec<Store>,
}

/// Expand the region literals into the full geographic hierarchy.
///
/// Each region gets exactly one province (the source data models a 1:1
/// region-province mapping and downstream references depend on it). Every
/// city samples up to 3 distinct barangay names, and every barangay hosts
/// 1-2 stores. Store names are chain + city and are not deduplicated.
pub fn build_geography(rng: &mut ChaCha8Rng) -> Result<Geography, GenerationError> {
    let mut region_ids = IdSequence::new("R", 2);
    let mut province_ids = IdSequence::new("P", 2);
    let mut city_ids = IdSequence::new("C", 3);
    let mut barangay_ids = IdSequence::new("B", 4);
    let mut store_ids = IdSequence::new("S", 3);

    let mut geography = Geography::default();

    for spec in REGIONS {
        let region_id = region_ids.next_id();
        geography.regions.push(Region {
            id: region_id.clone(),
            name: spec.region.to_string(),
        });

        let province_id = province_ids.next_id();
        geography.provinces.push(Province {
            id: province_id.clone(),
            name: spec.province.to_string(),
            region_id,
        });

        for city in spec.cities {
            let city_id = city_ids.next_id();
            geography.cities.push(City {
                id: city_id.clone(),
                name: (*city).to_string(),
                province_id: province_id.clone(),
            });

            let names: Vec<&&str> =
                BARANGAY_NAMES.choose_multiple(rng, BARANGAYS_PER_CITY).collect();
            for name in names {
                let barangay_id = barangay_ids.next_id();
                geography.barangays.push(Barangay {
                    id: barangay_id.clone(),
                    name: (*name).to_string(),
                    city_id: city_id.clone(),
                    latitude: sample_coordinate(rng, LAT_BAND),
                    longitude: sample_coordinate(rng, LNG_BAND),
                });

                for _ in 0..rng.random_range(1..=2) {
                    let chain = RETAIL_CHAINS.choose(rng).copied().ok_or_else(|| {
                        GenerationError::InvalidCatalog("no retail chains".to_string())
                    })?;
                    let store_name = format!("{chain} {city}");
                    let size = STORE_SIZES.choose(rng).copied().ok_or_else(|| {
                        GenerationError::InvalidCatalog("no store sizes".to_string())
                    })?;
                    geography.stores.push(Store {
                        id: store_ids.next_id(),
                        name: store_name.clone(),
                        barangay_id: barangay_id.clone(),
                        address: format!("{store_name} Address"),
                        size: size.to_string(),
                        latitude: sample_coordinate(rng, LAT_BAND),
                        longitude: sample_coordinate(rng, LNG_BAND),
                    });
                }
            }
        }
    }

    Ok(geography)
}

fn sample_coordinate(rng: &mut ChaCha8Rng, band: (f64, f64)) -> f64 {
    round_coordinate(rng.random_range(band.0..band.1))
}
