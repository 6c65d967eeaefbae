//! Example ad campaign templates per industry

use serde::Serialize;

use super::Entries;

/// Ad platform a campaign runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    #[serde(rename = "Meta")]
    Meta,
    #[serde(rename = "Google Ads")]
    GoogleAds,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meta => "Meta",
            Self::GoogleAds => "Google Ads",
        }
    }

    /// Host label of the platform's transparency center ("meta", "googleads")
    pub const fn transparency_label(self) -> &'static str {
        match self {
            Self::Meta => "meta",
            Self::GoogleAds => "googleads",
        }
    }

    /// Format assumed when a template does not name one
    pub const fn default_ad_format(self) -> &'static str {
        match self {
            Self::Meta => "Video",
            Self::GoogleAds => "Search",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct CampaignTemplate {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_creative_body: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_name: Option<&'static str>,
    pub advertiser_name: &'static str,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spend: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<&'static str>,
    pub ad_creative_link_description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_url: Option<&'static str>,
    /// Rendered by the campaign view, which falls back to the platform default
    #[serde(skip_serializing)]
    pub ad_format: Option<&'static str>,
    pub real_data: bool,
}

impl CampaignTemplate {
    pub fn ad_format(&self) -> &'static str {
        self.ad_format
            .unwrap_or_else(|| self.platform.default_ad_format())
    }
}

/// Templates served when the requested industry has none of its own
pub const FALLBACK_INDUSTRY: &str = "automotive";

macro_rules! meta_ad {
    ($id:expr, $body:expr, $page:expr, $advertiser:expr, $spend:expr, $impressions:expr, $desc:expr) => {
        CampaignTemplate {
            id: $id,
            ad_creative_body: Some($body),
            headline: None,
            page_name: Some($page),
            advertiser_name: $advertiser,
            platform: Platform::Meta,
            spend: Some($spend),
            impressions: Some($impressions),
            ad_creative_link_description: $desc,
            display_url: None,
            ad_format: None,
            real_data: true,
        }
    };
}

macro_rules! google_ad {
    ($id:expr, $headline:expr, $advertiser:expr, $desc:expr, $url:expr, $format:expr) => {
        CampaignTemplate {
            id: $id,
            ad_creative_body: None,
            headline: Some($headline),
            page_name: None,
            advertiser_name: $advertiser,
            platform: Platform::GoogleAds,
            spend: None,
            impressions: None,
            ad_creative_link_description: $desc,
            display_url: Some($url),
            ad_format: Some($format),
            real_data: true,
        }
    };
}

pub static CAMPAIGNS: Entries<&'static [CampaignTemplate]> = Entries(&[
    (
        "automotive",
        &[
            meta_ad!(
                "meta_auto_001",
                "🚗 Découvrez la nouvelle gamme électrique. Test drive gratuit en Belgique & France!",
                "Volkswagen Belgium",
                "Volkswagen Group",
                "€8,500-€15,200",
                "125,000-280,000",
                "Innovation électrique allemande. 0% d'émissions, 100% de plaisir. Réservez votre essai gratuit dès aujourd'hui."
            ),
            google_ad!(
                "google_auto_001",
                "Nouvelle Peugeot e-208 - Voiture Électrique",
                "Peugeot France",
                "La citadine électrique française. Autonomie 340km, recharge rapide. Configurez la vôtre.",
                "peugeot.fr/vehicules-electriques",
                "Search"
            ),
            meta_ad!(
                "meta_auto_002",
                "🔋 BMW iX : L'avenir de la mobilité premium est électrique",
                "BMW Belgique",
                "BMW Group",
                "€12,000-€24,500",
                "180,000-420,000",
                "SUV électrique de luxe avec 500km d'autonomie. Intelligence artificielle intégrée."
            ),
            google_ad!(
                "google_auto_002",
                "Renault Mégane E-Tech - 100% Électrique",
                "Renault Group",
                "Crossover électrique français. Design moderne, technologie avancée. À partir de €35,900.",
                "renault.fr/vehicules-electriques/megane-e-tech",
                "Display"
            ),
        ],
    ),
    (
        "technology",
        &[
            meta_ad!(
                "meta_tech_001",
                "🚀 SAP : Transformez votre entreprise avec l'IA et le cloud",
                "SAP",
                "SAP SE",
                "€15,000-€28,000",
                "95,000-180,000",
                "Solutions ERP intelligentes pour l'industrie 4.0. Démo gratuite disponible."
            ),
            google_ad!(
                "google_tech_001",
                "Microsoft 365 Business - Productivité Cloud",
                "Microsoft",
                "Suite bureautique complète dans le cloud. Collaboration en temps réel, sécurité avancée.",
                "microsoft.com/fr-be/microsoft-365/business",
                "Search"
            ),
            meta_ad!(
                "meta_tech_002",
                "📱 Philips : Innovation santé et bien-être depuis les Pays-Bas",
                "Philips BeNeLux",
                "Royal Philips",
                "€9,200-€16,800",
                "140,000-250,000",
                "Technologies de santé personnalisées. Équipements médicaux et solutions domicile."
            ),
        ],
    ),
    (
        "fashion",
        &[
            meta_ad!(
                "meta_fashion_001",
                "👗 ZARA : Nouvelle collection printemps-été disponible",
                "ZARA",
                "Inditex Group",
                "€18,500-€35,000",
                "450,000-820,000",
                "Mode tendance pour femmes, hommes et enfants. Livraison gratuite en magasin."
            ),
            google_ad!(
                "google_fashion_001",
                "H&M - Mode Durable & Abordable",
                "H&M Group",
                "Collection conscious avec matériaux recyclés. Style scandinave accessible.",
                "hm.com/be/shopping",
                "Display"
            ),
            meta_ad!(
                "meta_fashion_002",
                "⚡ Adidas : Impossible is Nothing. Nouvelle collection running",
                "adidas Belgium",
                "Adidas AG",
                "€22,000-€38,000",
                "380,000-650,000",
                "Chaussures de sport haute performance. Technologie Boost pour plus d'énergie."
            ),
        ],
    ),
    (
        "finance",
        &[
            meta_ad!(
                "meta_finance_001",
                "🏦 ING : Votre banque digitale en Belgique et aux Pays-Bas",
                "ING Belgium",
                "ING Group",
                "€12,500-€22,000",
                "160,000-290,000",
                "Banking simple et digital. Compte gratuit, app mobile primée."
            ),
            google_ad!(
                "google_finance_001",
                "BNP Paribas - Crédit Auto Avantageux",
                "BNP Paribas",
                "Financez votre véhicule avec des taux préférentiels. Simulation en ligne gratuite.",
                "bnpparibas.be/credit-auto",
                "Search"
            ),
        ],
    ),
]);

/// Templates for an industry, falling back to the automotive set
pub fn templates_for(industry: &str) -> &'static [CampaignTemplate] {
    CAMPAIGNS
        .get(industry)
        .or_else(|| CAMPAIGNS.get(FALLBACK_INDUSTRY))
        .copied()
        .unwrap_or(&[])
}
