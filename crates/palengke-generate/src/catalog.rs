//! Literal reference catalogs for the simulated market.
//!
//! Everything downstream is expanded from these fixed tables: the
//! geographic seed data, the barangay name pool, the retail chains, and
//! the two brand portfolios.

use crate::errors::GenerationError;

/// One region with its single province and the cities under it.
#[derive(Debug, Clone, Copy)]
pub struct RegionSpec {
    pub region: &'static str,
    pub province: &'static str,
    pub cities: &'static [&'static str],
}

/// One company with its category and product line.
#[derive(Debug, Clone, Copy)]
pub struct CompanySpec {
    pub company: &'static str,
    pub category: &'static str,
    pub products: &'static [&'static str],
}

pub const REGIONS: &[RegionSpec] = &[
    RegionSpec {
        region: "Metro Manila",
        province: "NCR",
        cities: &["Quezon City", "Makati", "Pasig", "Taguig"],
    },
    RegionSpec {
        region: "Cebu",
        province: "Central Visayas",
        cities: &["Cebu City", "Mandaue"],
    },
    RegionSpec {
        region: "Davao",
        province: "Davao Region",
        cities: &["Davao City"],
    },
    RegionSpec {
        region: "Pampanga",
        province: "Central Luzon",
        cities: &["Angeles", "San Fernando"],
    },
    RegionSpec {
        region: "Batangas",
        province: "CALABARZON",
        cities: &["Batangas City"],
    },
    RegionSpec {
        region: "Bicol",
        province: "Bicol Region",
        cities: &["Naga"],
    },
    RegionSpec {
        region: "Ilocos",
        province: "Ilocos Region",
        cities: &["Laoag"],
    },
    RegionSpec {
        region: "Negros Occidental",
        province: "Western Visayas",
        cities: &["Bacolod"],
    },
    RegionSpec {
        region: "Baguio",
        province: "Cordillera",
        cities: &["Baguio City"],
    },
    RegionSpec {
        region: "Laguna",
        province: "CALABARZON",
        cities: &["San Pablo"],
    },
];

pub const BARANGAY_NAMES: &[&str] = &[
    "Bagumbayan",
    "Poblacion",
    "Lahug",
    "Buhangin",
    "Pallocan West",
    "Mandalagan",
    "Bgy 17",
    "Balibago",
    "Ugong",
    "Abella",
];

pub const RETAIL_CHAINS: &[&str] = &[
    "SM",
    "Robinsons",
    "7-Eleven",
    "Shopwise",
    "Puregold",
    "Landers",
    "SaveMore",
];

pub const STORE_SIZES: &[&str] = &["Small", "Medium", "Large"];

pub const GENDERS: &[&str] = &["Male", "Female"];

pub const SUBSTITUTION_REASONS: &[&str] = &["Out of Stock", "Promo", "Preference"];

/// Placeholder package type carried by every SKU.
pub const PACKAGE_TYPE: &str = "Package";

/// Placeholder parent company carried by every brand.
pub const PARENT_COMPANY: &str = "Parent Company";

/// Up to this many distinct barangays are drawn per city.
pub const BARANGAYS_PER_CITY: usize = 3;

/// House portfolio; its brands take the first sequential IDs.
pub const HOUSE_PORTFOLIO: &[CompanySpec] = &[
    CompanySpec {
        company: "Alaska Milk Corporation",
        category: "Dairy",
        products: &[
            "Alaska Evaporated Milk",
            "Alaska Condensed Milk",
            "Alaska Powdered Milk",
            "Krem-Top (Coffee Creamer)",
            "Alpine (Evaporated & Condensed Milk)",
            "Cow Bell (Powdered Milk)",
        ],
    },
    CompanySpec {
        company: "Oishi",
        category: "Snacks",
        products: &[
            "Oishi Prawn Crackers",
            "Oishi Pillows",
            "Oishi Marty's",
            "Oishi Ridges",
            "Oishi Bread Pan",
            "Gourmet Picks",
            "Crispy Patata",
            "Smart C+ (Vitamin Drinks)",
            "Oaties",
            "Hi-Ho",
            "Rinbee",
            "Deli Mex",
        ],
    },
    CompanySpec {
        company: "Peerless",
        category: "Household",
        products: &[
            "Champion (Detergent, Fabric Conditioner)",
            "Calla (Personal Care Products)",
            "Hana (Shampoo and Conditioner)",
            "Cyclone (Bleach)",
            "Pride (Dishwashing Liquid)",
            "Care Plus (Alcohol and Hand Sanitizer)",
        ],
    },
    CompanySpec {
        company: "Del Monte Philippines",
        category: "Grocery",
        products: &[
            "Del Monte Pineapple (Juice, Chunks, Slices)",
            "Del Monte Tomato Sauce & Ketchup",
            "Del Monte Spaghetti Sauce",
            "Del Monte Fruit Cocktail",
            "Del Monte Pasta",
            "S&W (Premium Fruit & Vegetable Products)",
            "Today's (Budget-Friendly Product Line)",
            "Fit 'n Right (Juice Drinks)",
        ],
    },
    CompanySpec {
        company: "JTI",
        category: "Cigarettes",
        products: &[
            "Winston",
            "Camel",
            "Mevius (formerly Mild Seven)",
            "LD",
            "Mighty",
            "Caster",
            "Glamour",
        ],
    },
];

pub const COMPETITOR_PORTFOLIO: &[CompanySpec] = &[
    CompanySpec {
        company: "Jack 'n Jill",
        category: "Snacks",
        products: &["Chippy", "Piattos", "Nova", "Roller Coaster"],
    },
    CompanySpec {
        company: "Regent",
        category: "Snacks",
        products: &["Cheese Ring"],
    },
    CompanySpec {
        company: "Leslie's",
        category: "Snacks",
        products: &["Clover Chips"],
    },
    CompanySpec {
        company: "Lucky Me!",
        category: "Noodles",
        products: &["Lucky Me! Pancit Canton", "Lucky Me! Beef Noodles"],
    },
    CompanySpec {
        company: "Zest-O",
        category: "Beverages",
        products: &["Zest-O Orange", "Zest-O Mango"],
    },
    CompanySpec {
        company: "Coca-Cola",
        category: "Beverages",
        products: &["Coke", "Sprite", "Royal"],
    },
    CompanySpec {
        company: "Birch Tree",
        category: "Dairy",
        products: &["Birch Tree Milk"],
    },
    CompanySpec {
        company: "Surf",
        category: "Household",
        products: &["Surf Detergent"],
    },
    CompanySpec {
        company: "Downy",
        category: "Household",
        products: &["Downy Fabric Softener"],
    },
    CompanySpec {
        company: "Palmolive",
        category: "Personal Care",
        products: &["Palmolive Shampoo"],
    },
    CompanySpec {
        company: "Marlboro",
        category: "Cigarettes",
        products: &["Marlboro Red", "Marlboro Lights"],
    },
    CompanySpec {
        company: "Hope",
        category: "Cigarettes",
        products: &["Hope"],
    },
    CompanySpec {
        company: "Fortune",
        category: "Cigarettes",
        products: &["Fortune"],
    },
    CompanySpec {
        company: "Marvels",
        category: "Cigarettes",
        products: &["Marvels"],
    },
];

/// House portfolio first, then competitors, in declaration order.
pub fn portfolios() -> impl Iterator<Item = &'static CompanySpec> {
    HOUSE_PORTFOLIO.iter().chain(COMPETITOR_PORTFOLIO.iter())
}

/// Reject empty catalogs up front instead of failing inside a sampling
/// step with no context.
pub fn validate() -> Result<(), GenerationError> {
    if REGIONS.is_empty() {
        return Err(GenerationError::InvalidCatalog("no regions".to_string()));
    }
    for spec in REGIONS {
        if spec.cities.is_empty() {
            return Err(GenerationError::InvalidCatalog(format!(
                "region '{}' has no cities",
                spec.region
            )));
        }
    }
    if BARANGAY_NAMES.is_empty() {
        return Err(GenerationError::InvalidCatalog(
            "no barangay names".to_string(),
        ));
    }
    if RETAIL_CHAINS.is_empty() {
        return Err(GenerationError::InvalidCatalog(
            "no retail chains".to_string(),
        ));
    }
    if HOUSE_PORTFOLIO.is_empty() && COMPETITOR_PORTFOLIO.is_empty() {
        return Err(GenerationError::InvalidCatalog("no brands".to_string()));
    }
    for spec in portfolios() {
        if spec.products.is_empty() {
            return Err(GenerationError::InvalidCatalog(format!(
                "company '{}' has no products",
                spec.company
            )));
        }
    }
    Ok(())
}
