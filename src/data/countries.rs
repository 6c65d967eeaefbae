//! Country market profile
//!
//! One profile serves every country: brand names are prefixed with the
//! requested country and amounts carry the currency symbol at render time.

use super::Entries;

#[derive(Debug)]
pub struct CountryProfile {
    pub total_brands: u32,
    /// Amount without currency symbol, e.g. "3.2B"
    pub total_ad_spend: &'static str,
    pub total_market_share: f64,
    pub top_brands: &'static [TopBrandTemplate],
    pub industry_breakdown: Entries<IndustrySpend>,
}

#[derive(Debug)]
pub struct TopBrandTemplate {
    /// Appended to the country name
    pub suffix: &'static str,
    pub industry: &'static str,
    pub annual_ad_spend: &'static str,
}

#[derive(Debug)]
pub struct IndustrySpend {
    pub brands: u32,
    pub total_spend: &'static str,
}

pub const DEFAULT_COUNTRY: &str = "Germany";

/// Only this currency renders with the euro sign
pub const EURO_CURRENCY: &str = "EUR";

pub static COUNTRY_PROFILE: CountryProfile = CountryProfile {
    total_brands: 25,
    total_ad_spend: "3.2B",
    total_market_share: 45.8,
    top_brands: &[
        TopBrandTemplate {
            suffix: "Auto Leader",
            industry: "automotive",
            annual_ad_spend: "420M",
        },
        TopBrandTemplate {
            suffix: "Tech Giant",
            industry: "technology",
            annual_ad_spend: "380M",
        },
        TopBrandTemplate {
            suffix: "Fashion House",
            industry: "fashion",
            annual_ad_spend: "320M",
        },
    ],
    industry_breakdown: Entries(&[
        ("automotive", IndustrySpend { brands: 8, total_spend: "1.2B" }),
        ("technology", IndustrySpend { brands: 6, total_spend: "890M" }),
        ("fashion", IndustrySpend { brands: 5, total_spend: "650M" }),
        ("finance", IndustrySpend { brands: 4, total_spend: "380M" }),
        ("food", IndustrySpend { brands: 2, total_spend: "280M" }),
    ]),
};
