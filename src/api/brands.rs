// Brand details handler
// Resolves one brand name to its detail record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, Candidates};
use super::types::{default_country_filter, default_currency, key_string, truthy};
use crate::data::brands::{self, BrandRecord};
use crate::logger;

/// Names shown in the `available_brands` list of a miss
const AVAILABLE_BRANDS_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct BrandDetailsRequest {
    #[serde(default)]
    pub brand_name: Option<Value>,
    /// Accepted for compatibility; the brand table is keyed by name alone
    #[serde(default)]
    #[allow(dead_code)]
    pub industry: Option<Value>,
    #[serde(default = "default_currency")]
    pub currency: Value,
    #[serde(default = "default_country_filter")]
    pub country_filter: Value,
}

/// Brand record with the echoed request metadata
#[derive(Debug, Serialize)]
pub struct BrandDetails {
    #[serde(flatten)]
    pub record: &'static BrandRecord,
    pub country_filter: Value,
    pub currency: Value,
}

pub fn brand_details(req: BrandDetailsRequest) -> Result<BrandDetails, ApiError> {
    let brand_name = match req.brand_name.as_ref() {
        Some(name) if truthy(name) => key_string(name),
        _ => return Err(ApiError::Validation("Brand name is required".to_string())),
    };

    let Some(record) = brands::find(&brand_name) else {
        logger::log_lookup_miss("brand-details", &brand_name);
        let names = brands::names();
        return Err(ApiError::NotFound {
            message: format!("Brand \"{brand_name}\" not found"),
            candidates: Candidates::Brands {
                suggestion: format!("Try searching for: {}", names.join(", ")),
                available: names.into_iter().take(AVAILABLE_BRANDS_LIMIT).collect(),
            },
        });
    };

    Ok(BrandDetails {
        record,
        country_filter: req.country_filter,
        currency: req.currency,
    })
}
