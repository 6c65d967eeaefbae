//! Subcategory breakdowns: ranked brands with share-of-spend per (industry, subcategory)

use serde::Serialize;

use super::sectors::CountrySpend;
use super::Entries;

#[derive(Debug, Serialize)]
pub struct SubcategoryRecord {
    pub industry: &'static str,
    pub subcategory: &'static str,
    pub currency: &'static str,
    pub summary: SubcategorySummary,
    pub brands: &'static [RankedBrand],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_analysis: Option<Entries<CountrySpend>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_concentration: Option<MarketConcentration>,
}

#[derive(Debug, Serialize)]
pub struct SubcategorySummary {
    pub total_brands: u32,
    pub total_ad_spend_formatted: &'static str,
    pub average_spend_per_brand_formatted: &'static str,
    pub countries_represented: u32,
}

#[derive(Debug, Serialize)]
pub struct RankedBrand {
    pub name: &'static str,
    pub country: &'static str,
    pub annual_ad_spend_formatted: &'static str,
    /// Authored percentage, not derived from the spend figures
    pub share_of_category_spend: f64,
}

#[derive(Debug, Serialize)]
pub struct MarketConcentration {
    pub top_3_share: f64,
    pub top_5_share: f64,
    pub herfindahl_index: f64,
}

macro_rules! ranked {
    ($name:expr, $country:expr, $spend:expr, $share:expr) => {
        RankedBrand {
            name: $name,
            country: $country,
            annual_ad_spend_formatted: $spend,
            share_of_category_spend: $share,
        }
    };
}

/// industry → subcategory → record
pub static SUBCATEGORIES: Entries<Entries<SubcategoryRecord>> = Entries(&[
    (
        "automotive",
        Entries(&[
            (
                "luxury",
                SubcategoryRecord {
                    industry: "automotive",
                    subcategory: "luxury",
                    currency: "EUR",
                    summary: SubcategorySummary {
                        total_brands: 4,
                        total_ad_spend_formatted: "€380M",
                        average_spend_per_brand_formatted: "€95M",
                        countries_represented: 3,
                    },
                    brands: &[
                        ranked!("Mercedes-Benz", "Germany", "€95M", 25.0),
                        ranked!("BMW", "Germany", "€85M", 22.4),
                        ranked!("Audi", "Germany", "€78M", 20.5),
                        ranked!("Tesla", "USA", "€42M", 11.1),
                    ],
                    country_analysis: Some(Entries(&[
                        ("Germany", CountrySpend { brands: 3, total_spend_formatted: "€258M" }),
                        ("USA", CountrySpend { brands: 1, total_spend_formatted: "€42M" }),
                    ])),
                    market_concentration: Some(MarketConcentration {
                        top_3_share: 67.9,
                        top_5_share: 100.0,
                        herfindahl_index: 0.22,
                    }),
                },
            ),
            (
                "mainstream",
                SubcategoryRecord {
                    industry: "automotive",
                    subcategory: "mainstream",
                    currency: "EUR",
                    summary: SubcategorySummary {
                        total_brands: 8,
                        total_ad_spend_formatted: "€510M",
                        average_spend_per_brand_formatted: "€64M",
                        countries_represented: 5,
                    },
                    brands: &[
                        ranked!("Renault", "France", "€92M", 18.0),
                        ranked!("Volkswagen", "Germany", "€85M", 16.7),
                        ranked!("Toyota", "Japan", "€71M", 13.9),
                        ranked!("Peugeot", "France", "€67M", 13.1),
                        ranked!("Citroën", "France", "€52M", 10.2),
                        ranked!("Ford", "USA", "€48M", 9.4),
                        ranked!("Opel", "Germany", "€38M", 7.5),
                        ranked!("Hyundai", "South Korea", "€35M", 6.9),
                    ],
                    country_analysis: None,
                    market_concentration: None,
                },
            ),
        ]),
    ),
    (
        "technology",
        Entries(&[
            (
                "enterprise",
                SubcategoryRecord {
                    industry: "technology",
                    subcategory: "enterprise",
                    currency: "EUR",
                    summary: SubcategorySummary {
                        total_brands: 6,
                        total_ad_spend_formatted: "€680M",
                        average_spend_per_brand_formatted: "€113M",
                        countries_represented: 4,
                    },
                    brands: &[
                        ranked!("Microsoft", "USA", "€145M", 21.3),
                        ranked!("SAP", "Germany", "€125M", 18.4),
                        ranked!("Siemens", "Germany", "€112M", 16.5),
                        ranked!("ASML", "Netherlands", "€98M", 14.4),
                        ranked!("Oracle", "USA", "€89M", 13.1),
                        ranked!("Nokia", "Finland", "€67M", 9.9),
                    ],
                    country_analysis: None,
                    market_concentration: None,
                },
            ),
            (
                "consumer",
                SubcategoryRecord {
                    industry: "technology",
                    subcategory: "consumer",
                    currency: "EUR",
                    summary: SubcategorySummary {
                        total_brands: 9,
                        total_ad_spend_formatted: "€570M",
                        average_spend_per_brand_formatted: "€63M",
                        countries_represented: 6,
                    },
                    brands: &[
                        ranked!("Booking.com", "Netherlands", "€92M", 16.1),
                        ranked!("Apple", "USA", "€89M", 15.6),
                        ranked!("Samsung", "South Korea", "€78M", 13.7),
                        ranked!("Philips", "Netherlands", "€65M", 11.4),
                        ranked!("Sony", "Japan", "€58M", 10.2),
                        ranked!("Spotify", "Sweden", "€45M", 7.9),
                        ranked!("Garmin", "USA", "€41M", 7.2),
                        ranked!("JBL", "USA", "€38M", 6.7),
                        ranked!("TomTom", "Netherlands", "€34M", 6.0),
                    ],
                    country_analysis: None,
                    market_concentration: None,
                },
            ),
        ]),
    ),
    (
        "fashion",
        Entries(&[(
            "luxury",
            SubcategoryRecord {
                industry: "fashion",
                subcategory: "luxury",
                currency: "EUR",
                summary: SubcategorySummary {
                    total_brands: 7,
                    total_ad_spend_formatted: "€420M",
                    average_spend_per_brand_formatted: "€60M",
                    countries_represented: 4,
                },
                brands: &[
                    ranked!("Louis Vuitton", "France", "€85M", 20.2),
                    ranked!("Chanel", "France", "€78M", 18.6),
                    ranked!("Gucci", "Italy", "€71M", 16.9),
                    ranked!("Dior", "France", "€69M", 16.4),
                    ranked!("Hermès", "France", "€62M", 14.8),
                    ranked!("Hugo Boss", "Germany", "€45M", 10.7),
                    ranked!("Burberry", "UK", "€38M", 9.0),
                ],
                country_analysis: None,
                market_concentration: None,
            },
        )]),
    ),
    (
        "finance",
        Entries(&[(
            "banks",
            SubcategoryRecord {
                industry: "finance",
                subcategory: "banks",
                currency: "EUR",
                summary: SubcategorySummary {
                    total_brands: 8,
                    total_ad_spend_formatted: "€450M",
                    average_spend_per_brand_formatted: "€56M",
                    countries_represented: 4,
                },
                brands: &[
                    ranked!("BNP Paribas", "France", "€89M", 19.8),
                    ranked!("Société Générale", "France", "€71M", 15.8),
                    ranked!("ING", "Netherlands", "€68M", 15.1),
                    ranked!("Crédit Agricole", "France", "€56M", 12.4),
                    ranked!("ABN AMRO", "Netherlands", "€52M", 11.6),
                    ranked!("KBC", "Belgium", "€45M", 10.0),
                    ranked!("Deutsche Bank", "Germany", "€42M", 9.3),
                    ranked!("Rabobank", "Netherlands", "€38M", 8.4),
                ],
                country_analysis: None,
                market_concentration: None,
            },
        )]),
    ),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_keyed_by_their_own_names() {
        for (industry, table) in SUBCATEGORIES.0 {
            for (subcategory, record) in table.0 {
                assert_eq!(record.industry, *industry);
                assert_eq!(record.subcategory, *subcategory);
            }
        }
    }

    #[test]
    fn test_summary_counts_match_brand_lists() {
        for (_, table) in SUBCATEGORIES.0 {
            for (_, record) in table.0 {
                assert_eq!(record.summary.total_brands as usize, record.brands.len());
            }
        }
    }

    #[test]
    fn test_brands_are_ranked_by_share() {
        for (_, table) in SUBCATEGORIES.0 {
            for (_, record) in table.0 {
                let shares: Vec<f64> = record
                    .brands
                    .iter()
                    .map(|b| b.share_of_category_spend)
                    .collect();
                assert!(shares.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
