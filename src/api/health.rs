// Health report handler
// Static service metadata plus the hosting region

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::routes::Endpoint;
use super::types::serialize_pairs;
use crate::config::ServiceConfig;

#[derive(Debug, Serialize)]
pub struct HealthReport<'a> {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'a str,
    pub version: &'a str,
    /// Listed in `Endpoint::DATA` order
    #[serde(serialize_with = "serialize_pairs")]
    pub endpoints: Vec<(&'static str, String)>,
    pub environment: &'a str,
    pub region: &'a str,
}

/// Body returned when the report itself cannot be produced
#[derive(Debug, Serialize)]
pub struct Unhealthy {
    pub status: &'static str,
    pub timestamp: String,
    pub error: String,
}

/// ISO-8601 timestamp with millisecond precision
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<'a> HealthReport<'a> {
    pub fn new(service: &'a ServiceConfig, region: &'a str, prefix: &str, now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy",
            timestamp: iso_timestamp(now),
            service: &service.name,
            version: &service.version,
            endpoints: Endpoint::DATA
                .iter()
                .map(|e| (e.name(), format!("{prefix}{}", e.path())))
                .collect(),
            environment: &service.environment,
            region,
        }
    }
}

/// Render the health report, or the error that prevented it
pub fn health_check(
    service: &ServiceConfig,
    region: &str,
    prefix: &str,
    now: DateTime<Utc>,
) -> Result<Value, ApiError> {
    serde_json::to_value(HealthReport::new(service, region, prefix, now))
        .map_err(|e| ApiError::Internal(format!("Failed to render health report: {e}")))
}

pub fn unhealthy(err: &ApiError, now: DateTime<Utc>) -> Unhealthy {
    Unhealthy {
        status: "unhealthy",
        timestamp: iso_timestamp(now),
        error: err.to_string(),
    }
}
