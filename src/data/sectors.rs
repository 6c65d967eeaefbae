//! Sector aggregates: category totals and country breakdowns per industry

use serde::Serialize;

use super::Entries;

#[derive(Debug, Serialize)]
pub struct SectorRecord {
    pub total_brands: u32,
    pub sector_totals: SectorTotals,
    pub categories: Entries<CategoryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_breakdown: Option<Entries<CountrySpend>>,
}

#[derive(Debug, Serialize)]
pub struct SectorTotals {
    pub total_brands: u32,
    pub total_ad_spend: u64,
    pub total_ad_spend_formatted: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoryRecord {
    pub brand_count: u32,
    pub total_spend: u64,
    pub total_spend_formatted: &'static str,
    pub brands: &'static [BrandSummary],
}

#[derive(Debug, Serialize)]
pub struct BrandSummary {
    pub name: &'static str,
    pub country: &'static str,
    pub annual_ad_spend_formatted: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CountrySpend {
    pub brands: u32,
    pub total_spend_formatted: &'static str,
}

macro_rules! brand {
    ($name:expr, $country:expr, $spend:expr) => {
        BrandSummary {
            name: $name,
            country: $country,
            annual_ad_spend_formatted: $spend,
        }
    };
}

pub static SECTORS: Entries<SectorRecord> = Entries(&[
    (
        "automotive",
        SectorRecord {
            total_brands: 12,
            sector_totals: SectorTotals {
                total_brands: 12,
                total_ad_spend: 890_000_000,
                total_ad_spend_formatted: "€890M",
            },
            categories: Entries(&[
                (
                    "luxury",
                    CategoryRecord {
                        brand_count: 4,
                        total_spend: 380_000_000,
                        total_spend_formatted: "€380M",
                        brands: &[
                            brand!("BMW", "Germany", "€85M"),
                            brand!("Mercedes-Benz", "Germany", "€95M"),
                            brand!("Audi", "Germany", "€78M"),
                            brand!("Tesla", "USA", "€42M"),
                        ],
                    },
                ),
                (
                    "mainstream",
                    CategoryRecord {
                        brand_count: 8,
                        total_spend: 510_000_000,
                        total_spend_formatted: "€510M",
                        brands: &[
                            brand!("Volkswagen", "Germany", "€85M"),
                            brand!("Renault", "France", "€92M"),
                            brand!("Peugeot", "France", "€67M"),
                            brand!("Toyota", "Japan", "€71M"),
                            brand!("Ford", "USA", "€48M"),
                            brand!("Citroën", "France", "€52M"),
                            brand!("Opel", "Germany", "€38M"),
                            brand!("Hyundai", "South Korea", "€35M"),
                        ],
                    },
                ),
            ]),
            country_breakdown: Some(Entries(&[
                ("Germany", CountrySpend { brands: 4, total_spend_formatted: "€286M" }),
                ("France", CountrySpend { brands: 3, total_spend_formatted: "€211M" }),
                ("Japan", CountrySpend { brands: 1, total_spend_formatted: "€71M" }),
                ("USA", CountrySpend { brands: 2, total_spend_formatted: "€90M" }),
                ("South Korea", CountrySpend { brands: 1, total_spend_formatted: "€35M" }),
            ])),
        },
    ),
    (
        "technology",
        SectorRecord {
            total_brands: 15,
            sector_totals: SectorTotals {
                total_brands: 15,
                total_ad_spend: 1_250_000_000,
                total_ad_spend_formatted: "€1.25B",
            },
            categories: Entries(&[
                (
                    "enterprise",
                    CategoryRecord {
                        brand_count: 6,
                        total_spend: 680_000_000,
                        total_spend_formatted: "€680M",
                        brands: &[
                            brand!("SAP", "Germany", "€125M"),
                            brand!("Microsoft", "USA", "€145M"),
                            brand!("Oracle", "USA", "€89M"),
                            brand!("ASML", "Netherlands", "€98M"),
                            brand!("Siemens", "Germany", "€112M"),
                            brand!("Nokia", "Finland", "€67M"),
                        ],
                    },
                ),
                (
                    "consumer",
                    CategoryRecord {
                        brand_count: 9,
                        total_spend: 570_000_000,
                        total_spend_formatted: "€570M",
                        brands: &[
                            brand!("Apple", "USA", "€89M"),
                            brand!("Samsung", "South Korea", "€78M"),
                            brand!("Philips", "Netherlands", "€65M"),
                            brand!("Sony", "Japan", "€58M"),
                            brand!("Spotify", "Sweden", "€45M"),
                            brand!("Booking.com", "Netherlands", "€92M"),
                            brand!("TomTom", "Netherlands", "€34M"),
                            brand!("Garmin", "USA", "€41M"),
                            brand!("JBL", "USA", "€38M"),
                        ],
                    },
                ),
            ]),
            country_breakdown: None,
        },
    ),
    (
        "fashion",
        SectorRecord {
            total_brands: 18,
            sector_totals: SectorTotals {
                total_brands: 18,
                total_ad_spend: 980_000_000,
                total_ad_spend_formatted: "€980M",
            },
            categories: Entries(&[
                (
                    "luxury",
                    CategoryRecord {
                        brand_count: 7,
                        total_spend: 420_000_000,
                        total_spend_formatted: "€420M",
                        brands: &[
                            brand!("Louis Vuitton", "France", "€85M"),
                            brand!("Chanel", "France", "€78M"),
                            brand!("Hermès", "France", "€62M"),
                            brand!("Gucci", "Italy", "€71M"),
                            brand!("Dior", "France", "€69M"),
                            brand!("Hugo Boss", "Germany", "€45M"),
                            brand!("Burberry", "UK", "€38M"),
                        ],
                    },
                ),
                (
                    "mainstream",
                    CategoryRecord {
                        brand_count: 11,
                        total_spend: 560_000_000,
                        total_spend_formatted: "€560M",
                        brands: &[
                            brand!("Zara", "Spain", "€89M"),
                            brand!("H&M", "Sweden", "€82M"),
                            brand!("Uniqlo", "Japan", "€45M"),
                            brand!("Zalando", "Germany", "€67M"),
                            brand!("ASOS", "UK", "€52M"),
                            brand!("Adidas", "Germany", "€78M"),
                            brand!("Nike", "USA", "€71M"),
                            brand!("Puma", "Germany", "€35M"),
                            brand!("Lacoste", "France", "€28M"),
                            brand!("Tommy Hilfiger", "USA", "€31M"),
                            brand!("Calvin Klein", "USA", "€29M"),
                        ],
                    },
                ),
            ]),
            country_breakdown: None,
        },
    ),
    (
        "finance",
        SectorRecord {
            total_brands: 14,
            sector_totals: SectorTotals {
                total_brands: 14,
                total_ad_spend: 750_000_000,
                total_ad_spend_formatted: "€750M",
            },
            categories: Entries(&[
                (
                    "banks",
                    CategoryRecord {
                        brand_count: 8,
                        total_spend: 450_000_000,
                        total_spend_formatted: "€450M",
                        brands: &[
                            brand!("ING", "Netherlands", "€68M"),
                            brand!("ABN AMRO", "Netherlands", "€52M"),
                            brand!("KBC", "Belgium", "€45M"),
                            brand!("BNP Paribas", "France", "€89M"),
                            brand!("Société Générale", "France", "€71M"),
                            brand!("Crédit Agricole", "France", "€56M"),
                            brand!("Deutsche Bank", "Germany", "€42M"),
                            brand!("Rabobank", "Netherlands", "€38M"),
                        ],
                    },
                ),
                (
                    "insurance",
                    CategoryRecord {
                        brand_count: 6,
                        total_spend: 300_000_000,
                        total_spend_formatted: "€300M",
                        brands: &[
                            brand!("AXA", "France", "€78M"),
                            brand!("Allianz", "Germany", "€85M"),
                            brand!("AG Insurance", "Belgium", "€42M"),
                            brand!("Generali", "Italy", "€45M"),
                            brand!("Zurich", "Switzerland", "€35M"),
                            brand!("NN Group", "Netherlands", "€28M"),
                        ],
                    },
                ),
            ]),
            country_breakdown: None,
        },
    ),
]);
