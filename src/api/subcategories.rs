// Subcategory analysis handler
// Two-stage lookup: industry first, then subcategory within that industry

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{ApiError, Candidates};
use super::types::{default_country_filter, default_currency, key_or_unspecified, key_string};
use crate::data::subcategories::{SubcategoryRecord, SUBCATEGORIES};
use crate::logger;

fn default_subcategory() -> Value {
    Value::from("luxury")
}

#[derive(Debug, Deserialize)]
pub struct SubcategoryRequest {
    #[serde(default)]
    pub industry: Option<Value>,
    #[serde(default = "default_subcategory")]
    pub subcategory: Value,
    /// Accepted but not echoed; records carry their own currency
    #[serde(default = "default_currency")]
    #[allow(dead_code)]
    pub currency: Value,
    #[serde(default = "default_country_filter")]
    pub country_filter: Value,
}

#[derive(Debug, Serialize)]
pub struct SubcategoryAnalysis {
    #[serde(flatten)]
    pub record: &'static SubcategoryRecord,
    pub country_filter: Value,
}

pub fn subcategory_analysis(req: SubcategoryRequest) -> Result<SubcategoryAnalysis, ApiError> {
    let industry = key_or_unspecified(req.industry.as_ref());

    let Some(table) = req.industry.as_ref().and(SUBCATEGORIES.get(&industry)) else {
        logger::log_lookup_miss("subcategory-analysis", &industry);
        return Err(ApiError::NotFound {
            message: format!("Industry \"{industry}\" not found"),
            candidates: Candidates::Industries(SUBCATEGORIES.keys()),
        });
    };

    let subcategory = key_string(&req.subcategory);
    let Some(record) = table.get(&subcategory) else {
        logger::log_lookup_miss("subcategory-analysis", &format!("{industry}/{subcategory}"));
        return Err(ApiError::NotFound {
            message: format!("Subcategory \"{subcategory}\" not found in {industry}"),
            candidates: Candidates::Subcategories(table.keys()),
        });
    };

    Ok(SubcategoryAnalysis {
        record,
        country_filter: req.country_filter,
    })
}
