// src/services/geocoding_client.rs
// DOCUMENTATION: Geocoding provider client (Nominatim-compatible)
// PURPOSE: Handle communication with the geocoding service for town lookups

use crate::errors::PlacesError;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// One candidate match from the geocoding provider
/// DOCUMENTATION: Parsed entry of the provider's search response array
/// Coordinates arrive as strings and are parsed downstream
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodeCandidate {
    /// Full display name (e.g., "Springfield, Sangamon County, Illinois, USA")
    pub display_name: String,

    /// Place type reported by the provider (e.g., "city", "town", "hamlet")
    #[serde(rename = "type", default)]
    pub place_type: String,

    /// Provider-assigned relevance score; absent entries count as 0.0
    #[serde(default)]
    pub importance: f64,

    /// Latitude as a decimal string
    pub lat: String,

    /// Longitude as a decimal string
    pub lon: String,
}

/// Geocoding API client
/// DOCUMENTATION: Thin wrapper around the provider's free-text search endpoint
/// The reqwest client is shared application-wide and carries the
/// User-Agent and timeout configured at startup
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL for the geocoding provider
    base_url: String,
}

impl GeocodingClient {
    /// Create new geocoding client
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Search for candidate locations matching a free-text query
    /// DOCUMENTATION: Requests up to `limit` candidates with address details
    /// and extra tags so the resolver can score them
    ///
    /// # Arguments
    /// * `query` - Free-text town name (already trimmed and validated)
    /// * `limit` - Maximum number of candidates to request
    ///
    /// # Returns
    /// Vector of GeocodeCandidate results in provider order
    pub async fn search(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeocodeCandidate>, PlacesError> {
        let url = format!("{}/search", self.base_url);

        let limit_param = limit.to_string();
        let params = [
            ("q", query),
            ("format", "json"),
            ("limit", limit_param.as_str()),
            ("addressdetails", "1"),
            ("extratags", "1"),
        ];

        log::debug!("Geocoding search: q={}, limit={}", query, limit);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log::error!("Geocoding request timed out: {}", e);
                    PlacesError::UpstreamTimeout("Geocoding request timed out".to_string())
                } else {
                    log::error!("Geocoding request failed: {}", e);
                    PlacesError::UpstreamError(format!("Geocoding request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Geocoding provider returned status {}", status);
            return Err(PlacesError::UpstreamError(format!(
                "Failed to geocode town (status {})",
                status
            )));
        }

        let candidates: Vec<GeocodeCandidate> = response.json().await.map_err(|e| {
            log::error!("Failed to parse geocoding response: {}", e);
            PlacesError::UpstreamError(format!("Failed to parse geocoding response: {}", e))
        })?;

        log::info!(
            "Geocoding search for '{}' returned {} candidates",
            query,
            candidates.len()
        );

        Ok(candidates)
    }
}
