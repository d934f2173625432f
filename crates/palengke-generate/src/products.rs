use palengke_core::{Brand, IdSequence, Sku};

use crate::catalog::{PACKAGE_TYPE, PARENT_COMPANY, portfolios};

/// Flatten the brand portfolios into brand and SKU records.
///
/// House brands come first, so they take the low sequential IDs. Each SKU
/// inherits its brand's category.
pub fn build_catalog() -> (Vec<Brand>, Vec<Sku>) {
    let mut brand_ids = IdSequence::new("BR", 2);
    let mut sku_ids = IdSequence::new("SKU", 3);
    let mut brands = Vec::new();
    let mut skus = Vec::new();

    for spec in portfolios() {
        let brand_id = brand_ids.next_id();
        brands.push(Brand {
            id: brand_id.clone(),
            name: spec.company.to_string(),
            category: spec.category.to_string(),
            parent_company: PARENT_COMPANY.to_string(),
        });
        for product in spec.products {
            skus.push(Sku {
                id: sku_ids.next_id(),
                name: (*product).to_string(),
                brand_id: brand_id.clone(),
                category: spec.category.to_string(),
                package_type: PACKAGE_TYPE.to_string(),
            });
        }
    }

    (brands, skus)
}

#[cfg(test)]
mod tests {
    use super::build_catalog;

    #[test]
    fn house_brands_take_the_first_ids() {
        let (brands, skus) = build_catalog();
        assert_eq!(brands[0].id, "BR01");
        assert_eq!(brands[0].name, "Alaska Milk Corporation");
        assert_eq!(skus[0].id, "SKU001");
        assert_eq!(skus[0].brand_id, "BR01");
    }

    #[test]
    fn skus_inherit_brand_category() {
        let (brands, skus) = build_catalog();
        for sku in &skus {
            let brand = brands
                .iter()
                .find(|brand| brand.id == sku.brand_id)
                .expect("brand exists");
            assert_eq!(sku.category, brand.category);
        }
    }
}
