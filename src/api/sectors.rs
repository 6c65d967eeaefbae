// Sector overview handler
// Resolves an industry to its aggregate record. Unknown industries get a
// fallback object with status 200, unlike the 404 of the brand and
// subcategory lookups.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{default_country_filter, default_currency, key_or_unspecified};
use crate::data::sectors::{SectorRecord, SECTORS};
use crate::logger;

#[derive(Debug, Deserialize)]
pub struct SectorOverviewRequest {
    #[serde(default)]
    pub industry: Option<Value>,
    #[serde(default = "default_currency")]
    pub currency: Value,
    #[serde(default = "default_country_filter")]
    pub country_filter: Value,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SectorOverview {
    Found(SectorView),
    Unavailable(SectorFallback),
}

#[derive(Debug, Serialize)]
pub struct SectorView {
    #[serde(flatten)]
    pub record: &'static SectorRecord,
    pub industry: Value,
    pub currency: Value,
    pub country_filter: Value,
}

#[derive(Debug, Serialize)]
pub struct SectorFallback {
    /// Omitted when the request had no industry; `null` stays `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Value>,
    pub error: String,
    pub available_industries: Vec<&'static str>,
    pub currency: Value,
    pub country_filter: Value,
}

pub fn sector_overview(req: SectorOverviewRequest) -> SectorOverview {
    let SectorOverviewRequest {
        industry,
        currency,
        country_filter,
    } = req;

    let key = key_or_unspecified(industry.as_ref());
    match industry.as_ref().and(SECTORS.get(&key)) {
        Some(record) => SectorOverview::Found(SectorView {
            record,
            industry: industry.unwrap_or_default(),
            currency,
            country_filter,
        }),
        None => {
            logger::log_lookup_miss("sector-overview", &key);
            SectorOverview::Unavailable(SectorFallback {
                error: format!("No data available for {key} industry"),
                industry,
                available_industries: SECTORS.keys(),
                currency,
                country_filter,
            })
        }
    }
}
