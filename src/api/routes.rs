// Route table
// Maps request paths to endpoints, honouring the configured path prefixes

/// Endpoints served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    BrandDetails,
    SectorOverview,
    SubcategoryAnalysis,
    CountryAnalysis,
    RealCampaigns,
    Health,
}

impl Endpoint {
    /// Data endpoints, in the order the health report lists them
    pub const DATA: [Self; 5] = [
        Self::SectorOverview,
        Self::BrandDetails,
        Self::SubcategoryAnalysis,
        Self::CountryAnalysis,
        Self::RealCampaigns,
    ];

    pub const ALL: [Self; 6] = [
        Self::SectorOverview,
        Self::BrandDetails,
        Self::SubcategoryAnalysis,
        Self::CountryAnalysis,
        Self::RealCampaigns,
        Self::Health,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::BrandDetails => "brand-details",
            Self::SectorOverview => "sector-overview",
            Self::SubcategoryAnalysis => "subcategory-analysis",
            Self::CountryAnalysis => "country-analysis",
            Self::RealCampaigns => "real-campaigns",
            Self::Health => "health",
        }
    }

    /// Path without any prefix
    pub const fn path(self) -> &'static str {
        match self {
            Self::BrandDetails => "/brands/brand-details",
            Self::SectorOverview => "/brands/sector-overview",
            Self::SubcategoryAnalysis => "/brands/subcategory-analysis",
            Self::CountryAnalysis => "/brands/country-analysis",
            Self::RealCampaigns => "/real-campaigns",
            Self::Health => "/health",
        }
    }

    /// Only the health report answers to every method
    pub const fn requires_post(self) -> bool {
        !matches!(self, Self::Health)
    }

    /// Resolve a request path under any of the given prefixes.
    ///
    /// A single trailing slash is ignored.
    pub fn resolve(path: &str, prefixes: &[String]) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        prefixes.iter().find_map(|prefix| {
            let rest = path.strip_prefix(prefix.as_str())?;
            Self::ALL.into_iter().find(|e| e.path() == rest)
        })
    }

    /// Every routable path, for the unknown-route body
    pub fn available_paths(prefixes: &[String]) -> Vec<String> {
        prefixes
            .iter()
            .flat_map(|prefix| Self::ALL.iter().map(move |e| format!("{prefix}{}", e.path())))
            .collect()
    }
}
