// Country analysis handler
// Renders the shared country profile for the requested country and currency

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{default_currency, key_string};
use crate::data::countries::{CountryProfile, COUNTRY_PROFILE, DEFAULT_COUNTRY, EURO_CURRENCY};

fn default_country() -> Value {
    Value::from(DEFAULT_COUNTRY)
}

#[derive(Debug, Deserialize)]
pub struct CountryAnalysisRequest {
    #[serde(default = "default_country")]
    pub country: Value,
    #[serde(default = "default_currency")]
    pub currency: Value,
}

#[derive(Debug, Serialize)]
pub struct CountrySummary {
    pub total_brands: u32,
    pub total_ad_spend_formatted: String,
    pub total_market_share: f64,
    pub industries_represented: usize,
}

#[derive(Debug, Serialize)]
pub struct TopBrand {
    pub name: String,
    pub industry: &'static str,
    pub annual_ad_spend_formatted: String,
}

#[derive(Debug, Serialize)]
pub struct IndustryShare {
    pub brands: u32,
    pub total_spend_formatted: String,
}

#[derive(Debug, Serialize)]
pub struct CountryAnalysis {
    pub country: Value,
    pub currency: Value,
    pub summary: CountrySummary,
    pub top_brands: Vec<TopBrand>,
    /// Keeps the profile's industry order
    #[serde(serialize_with = "super::types::serialize_pairs")]
    pub industry_breakdown: Vec<(&'static str, IndustryShare)>,
}

/// "€" for EUR, "$" for anything else (including a non-string currency)
fn currency_symbol(currency: &Value) -> &'static str {
    if currency.as_str() == Some(EURO_CURRENCY) {
        "€"
    } else {
        "$"
    }
}

fn render(profile: &CountryProfile, country: Value, currency: Value) -> CountryAnalysis {
    let symbol = currency_symbol(&currency);
    let country_name = key_string(&country);

    CountryAnalysis {
        summary: CountrySummary {
            total_brands: profile.total_brands,
            total_ad_spend_formatted: format!("{symbol}{}", profile.total_ad_spend),
            total_market_share: profile.total_market_share,
            industries_represented: profile.industry_breakdown.0.len(),
        },
        top_brands: profile
            .top_brands
            .iter()
            .map(|b| TopBrand {
                name: format!("{country_name} {}", b.suffix),
                industry: b.industry,
                annual_ad_spend_formatted: format!("{symbol}{}", b.annual_ad_spend),
            })
            .collect(),
        industry_breakdown: profile
            .industry_breakdown
            .0
            .iter()
            .map(|(industry, spend)| {
                (
                    *industry,
                    IndustryShare {
                        brands: spend.brands,
                        total_spend_formatted: format!("{symbol}{}", spend.total_spend),
                    },
                )
            })
            .collect(),
        country,
        currency,
    }
}

pub fn country_analysis(req: CountryAnalysisRequest) -> CountryAnalysis {
    render(&COUNTRY_PROFILE, req.country, req.currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn analyse(body: Value) -> Value {
        let req: CountryAnalysisRequest = serde_json::from_value(body).unwrap();
        serde_json::to_value(country_analysis(req)).unwrap()
    }

    #[test]
    fn test_defaults_to_germany_in_euros() {
        let body = analyse(json!({}));
        assert_eq!(body["country"], "Germany");
        assert_eq!(body["currency"], "EUR");
        assert_eq!(body["summary"]["total_brands"], 25);
        assert_eq!(body["summary"]["total_ad_spend_formatted"], "€3.2B");
        assert_eq!(body["summary"]["total_market_share"], 45.8);
        assert_eq!(body["summary"]["industries_represented"], 5);
        assert_eq!(body["top_brands"][0]["name"], "Germany Auto Leader");
        assert_eq!(body["top_brands"][1]["annual_ad_spend_formatted"], "€380M");
    }

    #[test]
    fn test_breakdown_keeps_industry_order() {
        let body = analyse(json!({ "country": "France" }));
        let keys: Vec<_> = body["industry_breakdown"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(body["industry_breakdown"]["food"]["brands"], 2);
        assert_eq!(body["industry_breakdown"]["technology"]["total_spend_formatted"], "€890M");
        assert_eq!(body["top_brands"][2]["name"], "France Fashion House");
    }

    #[test]
    fn test_non_euro_currency_uses_dollar_sign() {
        let body = analyse(json!({ "country": "Belgium", "currency": "USD" }));
        assert_eq!(body["currency"], "USD");
        assert_eq!(body["summary"]["total_ad_spend_formatted"], "$3.2B");
        assert_eq!(body["industry_breakdown"]["automotive"]["total_spend_formatted"], "$1.2B");

        let body = analyse(json!({ "currency": null }));
        assert!(body["currency"].is_null());
        assert_eq!(body["top_brands"][0]["annual_ad_spend_formatted"], "$420M");
    }

    #[test]
    fn test_serialized_field_order() {
        let req: CountryAnalysisRequest = serde_json::from_value(json!({})).unwrap();
        let text = serde_json::to_string(&country_analysis(req)).unwrap();
        let automotive = text.find("\"automotive\":{").unwrap();
        let food = text.find("\"food\":{").unwrap();
        assert!(text.starts_with("{\"country\":\"Germany\",\"currency\":\"EUR\",\"summary\""));
        assert!(automotive < food);
    }
}
