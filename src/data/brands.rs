//! Brand detail records for the Belgium & France markets

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BrandRecord {
    pub brand_name: &'static str,
    pub industry: &'static str,
    pub category: &'static str,
    pub country: &'static str,
    pub headquarters: &'static str,
    pub financial_data: FinancialData,
    pub competitive_position: CompetitivePosition,
    pub advertising_breakdown: AdvertisingBreakdown,
}

#[derive(Debug, Serialize)]
pub struct FinancialData {
    pub annual_ad_spend_formatted: &'static str,
    pub currency: &'static str,
    pub market_share_percent: f64,
    pub estimated_monthly_spend_formatted: &'static str,
    pub estimated_daily_spend_formatted: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CompetitivePosition {
    pub rank_in_category: u32,
    pub total_brands_in_category: u32,
    pub category_leader: &'static str,
    pub spend_vs_leader: f64,
}

#[derive(Debug, Serialize)]
pub struct AdvertisingBreakdown {
    pub digital_estimated_formatted: &'static str,
    pub traditional_estimated_formatted: &'static str,
    pub meta_estimated_formatted: &'static str,
    pub google_estimated_formatted: &'static str,
    pub other_digital_estimated_formatted: &'static str,
}

/// Find a brand by its exact name
pub fn find(brand_name: &str) -> Option<&'static BrandRecord> {
    BRANDS.iter().find(|b| b.brand_name == brand_name)
}

/// Brand names in table order
pub fn names() -> Vec<&'static str> {
    BRANDS.iter().map(|b| b.brand_name).collect()
}

pub static BRANDS: &[BrandRecord] = &[
    // Automotive
    BrandRecord {
        brand_name: "BMW",
        industry: "automotive",
        category: "luxury",
        country: "Germany",
        headquarters: "Munich",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€85M",
            currency: "EUR",
            market_share_percent: 4.2,
            estimated_monthly_spend_formatted: "€7.1M",
            estimated_daily_spend_formatted: "€233K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 2,
            total_brands_in_category: 4,
            category_leader: "Mercedes-Benz",
            spend_vs_leader: 0.89,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€55M",
            traditional_estimated_formatted: "€30M",
            meta_estimated_formatted: "€28M",
            google_estimated_formatted: "€27M",
            other_digital_estimated_formatted: "€30M",
        },
    },
    BrandRecord {
        brand_name: "Volkswagen",
        industry: "automotive",
        category: "mainstream",
        country: "Germany",
        headquarters: "Wolfsburg",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€85M",
            currency: "EUR",
            market_share_percent: 12.8,
            estimated_monthly_spend_formatted: "€7.1M",
            estimated_daily_spend_formatted: "€233K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 1,
            total_brands_in_category: 8,
            category_leader: "Volkswagen",
            spend_vs_leader: 1.0,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€51M",
            traditional_estimated_formatted: "€34M",
            meta_estimated_formatted: "€26M",
            google_estimated_formatted: "€25M",
            other_digital_estimated_formatted: "€34M",
        },
    },
    BrandRecord {
        brand_name: "Renault",
        industry: "automotive",
        category: "mainstream",
        country: "France",
        headquarters: "Boulogne-Billancourt",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€92M",
            currency: "EUR",
            market_share_percent: 15.2,
            estimated_monthly_spend_formatted: "€7.7M",
            estimated_daily_spend_formatted: "€252K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 1,
            total_brands_in_category: 8,
            category_leader: "Renault",
            spend_vs_leader: 1.0,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€57M",
            traditional_estimated_formatted: "€35M",
            meta_estimated_formatted: "€29M",
            google_estimated_formatted: "€28M",
            other_digital_estimated_formatted: "€35M",
        },
    },
    BrandRecord {
        brand_name: "Peugeot",
        industry: "automotive",
        category: "mainstream",
        country: "France",
        headquarters: "Paris",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€67M",
            currency: "EUR",
            market_share_percent: 11.8,
            estimated_monthly_spend_formatted: "€5.6M",
            estimated_daily_spend_formatted: "€184K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 3,
            total_brands_in_category: 8,
            category_leader: "Renault",
            spend_vs_leader: 0.73,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€39M",
            traditional_estimated_formatted: "€28M",
            meta_estimated_formatted: "€20M",
            google_estimated_formatted: "€19M",
            other_digital_estimated_formatted: "€28M",
        },
    },
    // Technology
    BrandRecord {
        brand_name: "SAP",
        industry: "technology",
        category: "enterprise",
        country: "Germany",
        headquarters: "Walldorf",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€125M",
            currency: "EUR",
            market_share_percent: 8.9,
            estimated_monthly_spend_formatted: "€10.4M",
            estimated_daily_spend_formatted: "€342K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 2,
            total_brands_in_category: 6,
            category_leader: "Microsoft",
            spend_vs_leader: 0.86,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€88M",
            traditional_estimated_formatted: "€37M",
            meta_estimated_formatted: "€35M",
            google_estimated_formatted: "€53M",
            other_digital_estimated_formatted: "€37M",
        },
    },
    BrandRecord {
        brand_name: "Microsoft",
        industry: "technology",
        category: "enterprise",
        country: "USA",
        headquarters: "Redmond",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€145M",
            currency: "EUR",
            market_share_percent: 12.4,
            estimated_monthly_spend_formatted: "€12.1M",
            estimated_daily_spend_formatted: "€397K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 1,
            total_brands_in_category: 6,
            category_leader: "Microsoft",
            spend_vs_leader: 1.0,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€102M",
            traditional_estimated_formatted: "€43M",
            meta_estimated_formatted: "€38M",
            google_estimated_formatted: "€64M",
            other_digital_estimated_formatted: "€43M",
        },
    },
    // Fashion
    BrandRecord {
        brand_name: "Zara",
        industry: "fashion",
        category: "mainstream",
        country: "Spain",
        headquarters: "La Coruña",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€89M",
            currency: "EUR",
            market_share_percent: 9.1,
            estimated_monthly_spend_formatted: "€7.4M",
            estimated_daily_spend_formatted: "€244K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 1,
            total_brands_in_category: 11,
            category_leader: "Zara",
            spend_vs_leader: 1.0,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€67M",
            traditional_estimated_formatted: "€22M",
            meta_estimated_formatted: "€45M",
            google_estimated_formatted: "€22M",
            other_digital_estimated_formatted: "€22M",
        },
    },
    // Finance
    BrandRecord {
        brand_name: "ING",
        industry: "finance",
        category: "banks",
        country: "Netherlands",
        headquarters: "Amsterdam",
        financial_data: FinancialData {
            annual_ad_spend_formatted: "€68M",
            currency: "EUR",
            market_share_percent: 9.1,
            estimated_monthly_spend_formatted: "€5.7M",
            estimated_daily_spend_formatted: "€186K",
        },
        competitive_position: CompetitivePosition {
            rank_in_category: 2,
            total_brands_in_category: 8,
            category_leader: "BNP Paribas",
            spend_vs_leader: 0.76,
        },
        advertising_breakdown: AdvertisingBreakdown {
            digital_estimated_formatted: "€45M",
            traditional_estimated_formatted: "€23M",
            meta_estimated_formatted: "€22M",
            google_estimated_formatted: "€23M",
            other_digital_estimated_formatted: "€23M",
        },
    },
];
