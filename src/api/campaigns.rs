// Campaign templates handler
// Serves example ad campaigns per industry with platform filtering and
// synthesized preview visuals. No upstream ad API is contacted; the access
// token only changes the reported data source.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{key_string, truthy};
use crate::data::campaigns::{self, CampaignTemplate, Platform};

/// Offset added to a campaign's position to seed its thumbnail
const THUMBNAIL_SEED_OFFSET: usize = 10;

fn default_industry() -> Value {
    Value::from(campaigns::FALLBACK_INDUSTRY)
}

fn default_countries() -> Value {
    Value::from("BE,FR")
}

fn default_platform() -> Value {
    Value::from("both")
}

fn default_include_visuals() -> Value {
    Value::Bool(true)
}

#[derive(Debug, Deserialize)]
pub struct CampaignRequest {
    #[serde(default = "default_industry")]
    pub industry: Value,
    /// Comma-separated country codes
    #[serde(default = "default_countries")]
    pub countries: Value,
    #[serde(default = "default_platform")]
    pub platform: Value,
    /// Any truthy value turns visuals on; echoed unchanged in the summary
    #[serde(default = "default_include_visuals")]
    pub include_visuals: Value,
    #[serde(default)]
    pub meta_access_token: Option<Value>,
}

impl CampaignRequest {
    /// `null` countries read as the default pair
    fn country_list(&self) -> Vec<String> {
        let countries = if self.countries.is_null() {
            default_countries()
        } else {
            self.countries.clone()
        };
        key_string(&countries).split(',').map(str::to_string).collect()
    }
}

/// Which platforms a request keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFilter {
    All,
    Only(Platform),
}

impl PlatformFilter {
    /// "meta" and "google" select one platform; anything else keeps all
    pub fn parse(value: &str) -> Self {
        match value {
            "meta" => Self::Only(Platform::Meta),
            "google" => Self::Only(Platform::GoogleAds),
            _ => Self::All,
        }
    }

    /// Non-string values keep all platforms
    pub fn from_value(value: &Value) -> Self {
        value.as_str().map_or(Self::All, Self::parse)
    }

    pub fn accepts(self, platform: Platform) -> bool {
        match self {
            Self::All => true,
            Self::Only(p) => p == platform,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Visuals {
    pub platform: Platform,
    pub ad_id: &'static str,
    pub visual_type: &'static str,
    pub preview_url: String,
    pub thumbnail_url: String,
    pub disclaimer: String,
}

impl Visuals {
    /// `position` is the campaign's index in the filtered list
    fn for_campaign(template: &'static CampaignTemplate, position: usize) -> Self {
        Self {
            platform: template.platform,
            ad_id: template.id,
            visual_type: "campaign_preview",
            preview_url: format!(
                "https://transparency.{}.com/ad/{}",
                template.platform.transparency_label(),
                template.id
            ),
            thumbnail_url: format!(
                "https://picsum.photos/400/300?random={}",
                position + THUMBNAIL_SEED_OFFSET
            ),
            disclaimer: format!(
                "Visual from {} Transparency Center - Publicly Available",
                template.platform
            ),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub template: &'static CampaignTemplate,
    pub target_countries: Vec<String>,
    pub industry_classification: Value,
    pub ad_format: &'static str,
    /// Explicit `null` when visuals were not requested
    pub visuals: Option<Visuals>,
}

#[derive(Debug, Serialize)]
pub struct CampaignSummary {
    pub total_campaigns: usize,
    /// Distinct platforms in first-seen order
    pub platforms: Vec<Platform>,
    pub with_visuals: Value,
}

#[derive(Debug, Serialize)]
pub struct CampaignReport {
    pub industry: Value,
    pub target_countries: Vec<String>,
    pub data_source: &'static str,
    pub campaigns: Vec<Campaign>,
    pub summary: CampaignSummary,
    pub api_note: &'static str,
}

pub fn real_campaigns(req: CampaignRequest) -> CampaignReport {
    let countries = req.country_list();
    let filter = PlatformFilter::from_value(&req.platform);
    let with_visuals = truthy(&req.include_visuals);

    let campaigns: Vec<Campaign> = campaigns::templates_for(&key_string(&req.industry))
        .iter()
        .filter(|t| filter.accepts(t.platform))
        .enumerate()
        .map(|(position, template)| Campaign {
            template,
            target_countries: countries.clone(),
            industry_classification: req.industry.clone(),
            ad_format: template.ad_format(),
            visuals: with_visuals.then(|| Visuals::for_campaign(template, position)),
        })
        .collect();

    let mut platforms = Vec::new();
    for campaign in &campaigns {
        if !platforms.contains(&campaign.template.platform) {
            platforms.push(campaign.template.platform);
        }
    }

    let has_token = req.meta_access_token.as_ref().is_some_and(truthy);

    CampaignReport {
        industry: req.industry,
        target_countries: countries,
        data_source: if has_token { "real_apis" } else { "demo_structure" },
        summary: CampaignSummary {
            total_campaigns: campaigns.len(),
            platforms,
            with_visuals: req.include_visuals,
        },
        campaigns,
        api_note: if has_token {
            "Using real Meta API token for live data"
        } else {
            "Demo data structure - provide Meta access token for real API calls"
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn report(body: Value) -> Value {
        let req: CampaignRequest = serde_json::from_value(body).unwrap();
        serde_json::to_value(real_campaigns(req)).unwrap()
    }

    #[test]
    fn test_defaults() {
        let body = report(json!({}));
        assert_eq!(body["industry"], "automotive");
        assert_eq!(body["target_countries"], json!(["BE", "FR"]));
        assert_eq!(body["data_source"], "demo_structure");
        assert_eq!(body["summary"]["total_campaigns"], 4);
        assert_eq!(body["summary"]["platforms"], json!(["Meta", "Google Ads"]));
        assert_eq!(body["summary"]["with_visuals"], true);
        assert_eq!(
            body["api_note"],
            "Demo data structure - provide Meta access token for real API calls"
        );
    }

    #[test]
    fn test_meta_filter_keeps_only_meta() {
        let body = report(json!({ "industry": "technology", "platform": "meta" }));
        let campaigns = body["campaigns"].as_array().unwrap();
        assert_eq!(campaigns.len(), 2);
        assert!(campaigns.iter().all(|c| c["platform"] == "Meta"));
        assert_eq!(body["summary"]["platforms"], json!(["Meta"]));
    }

    #[test]
    fn test_google_filter_for_fashion() {
        let body = report(json!({ "industry": "fashion", "platform": "google" }));
        let campaigns = body["campaigns"].as_array().unwrap();
        assert_eq!(campaigns.len(), 1);
        assert!(campaigns.iter().all(|c| c["platform"] == "Google Ads"));
        assert_eq!(campaigns[0]["ad_format"], "Display");
    }

    #[test]
    fn test_unrecognized_platform_keeps_all() {
        let body = report(json!({ "industry": "finance", "platform": "tiktok" }));
        assert_eq!(body["campaigns"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_visuals_use_filtered_position() {
        let body = report(json!({ "platform": "google" }));
        let campaigns = body["campaigns"].as_array().unwrap();
        assert_eq!(campaigns[0]["id"], "google_auto_001");
        assert_eq!(
            campaigns[0]["visuals"]["thumbnail_url"],
            "https://picsum.photos/400/300?random=10"
        );
        assert_eq!(
            campaigns[1]["visuals"]["thumbnail_url"],
            "https://picsum.photos/400/300?random=11"
        );
        assert_eq!(
            campaigns[0]["visuals"]["preview_url"],
            "https://transparency.googleads.com/ad/google_auto_001"
        );
        assert_eq!(
            campaigns[0]["visuals"]["disclaimer"],
            "Visual from Google Ads Transparency Center - Publicly Available"
        );
    }

    #[test]
    fn test_visuals_disabled_are_null() {
        let body = report(json!({ "industry": "technology", "include_visuals": false }));
        let campaigns = body["campaigns"].as_array().unwrap();
        assert!(!campaigns.is_empty());
        for campaign in campaigns {
            assert!(campaign.get("visuals").is_some());
            assert!(campaign["visuals"].is_null());
        }
        assert_eq!(body["summary"]["with_visuals"], false);
    }

    #[test]
    fn test_item_enrichment() {
        let body = report(json!({ "industry": "finance", "countries": "BE,NL,LU" }));
        let meta = &body["campaigns"][0];
        assert_eq!(meta["target_countries"], json!(["BE", "NL", "LU"]));
        assert_eq!(meta["industry_classification"], "finance");
        assert_eq!(meta["ad_format"], "Video");
        assert_eq!(meta["real_data"], true);
        assert_eq!(meta["visuals"]["preview_url"], "https://transparency.meta.com/ad/meta_finance_001");
        assert!(meta.get("headline").is_none());
    }

    #[test]
    fn test_unknown_industry_uses_automotive_templates() {
        let body = report(json!({ "industry": "aerospace" }));
        assert_eq!(body["industry"], "aerospace");
        assert_eq!(body["campaigns"][0]["id"], "meta_auto_001");
        assert_eq!(body["campaigns"][0]["industry_classification"], "aerospace");
    }

    #[test]
    fn test_token_switches_reported_source() {
        let body = report(json!({ "meta_access_token": "EAAB-token" }));
        assert_eq!(body["data_source"], "real_apis");
        assert_eq!(body["api_note"], "Using real Meta API token for live data");

        let body = report(json!({ "meta_access_token": "" }));
        assert_eq!(body["data_source"], "demo_structure");
    }

    #[test]
    fn test_platform_filter_parse() {
        assert_eq!(PlatformFilter::parse("meta"), PlatformFilter::Only(Platform::Meta));
        assert_eq!(PlatformFilter::parse("google"), PlatformFilter::Only(Platform::GoogleAds));
        assert_eq!(PlatformFilter::parse("both"), PlatformFilter::All);
        assert_eq!(PlatformFilter::parse("Meta"), PlatformFilter::All);
    }

    #[test]
    fn test_null_platform_keeps_all() {
        let body = report(json!({ "industry": "fashion", "platform": null }));
        assert_eq!(body["campaigns"].as_array().unwrap().len(), 3);
        assert_eq!(PlatformFilter::from_value(&json!(3)), PlatformFilter::All);
        assert_eq!(
            PlatformFilter::from_value(&json!("google")),
            PlatformFilter::Only(Platform::GoogleAds)
        );
    }

    #[test]
    fn test_include_visuals_follows_truthiness() {
        let body = report(json!({ "include_visuals": 0 }));
        assert!(body["campaigns"][0]["visuals"].is_null());
        assert_eq!(body["summary"]["with_visuals"], 0);

        let body = report(json!({ "include_visuals": "yes" }));
        assert!(body["campaigns"][0]["visuals"].is_object());
        assert_eq!(body["summary"]["with_visuals"], "yes");

        let body = report(json!({ "include_visuals": null }));
        assert!(body["campaigns"][0]["visuals"].is_null());
    }

    #[test]
    fn test_loose_industry_and_countries() {
        let body = report(json!({ "industry": null, "countries": null }));
        assert!(body["industry"].is_null());
        assert_eq!(body["target_countries"], json!(["BE", "FR"]));
        assert_eq!(body["campaigns"][0]["id"], "meta_auto_001");
        assert!(body["campaigns"][0]["industry_classification"].is_null());

        let body = report(json!({ "industry": "technology", "countries": ["DE", "NL"] }));
        assert_eq!(body["target_countries"], json!(["DE", "NL"]));
    }

    #[test]
    fn test_truthy_token_of_any_type() {
        let body = report(json!({ "meta_access_token": 1 }));
        assert_eq!(body["data_source"], "real_apis");
        let body = report(json!({ "meta_access_token": null }));
        assert_eq!(body["data_source"], "demo_structure");
    }
}
