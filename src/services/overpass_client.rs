// src/services/overpass_client.rs
// DOCUMENTATION: Map-data provider client (Overpass-compatible)
// PURPOSE: Fetch raw map elements around a coordinate, filtered by tag

use crate::errors::PlacesError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Computed center point for way/relation geometries
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CenterPoint {
    /// Center latitude
    pub lat: Option<f64>,
    /// Center longitude
    pub lon: Option<f64>,
}

/// One raw element from the map-data provider
/// DOCUMENTATION: Nodes carry direct coordinates; ways and relations
/// carry a computed center instead
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMapElement {
    /// Provider-assigned numeric element id
    pub id: i64,

    /// Tag mapping (name, addr:*, amenity, ...); may be absent entirely
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,

    /// Direct latitude (nodes)
    #[serde(default)]
    pub lat: Option<f64>,

    /// Direct longitude (nodes)
    #[serde(default)]
    pub lon: Option<f64>,

    /// Computed center (ways and relations)
    #[serde(default)]
    pub center: Option<CenterPoint>,
}

/// Envelope of the provider's JSON response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<RawMapElement>,
}

/// Map-data API client
/// DOCUMENTATION: Issues a single radius query per request covering
/// node, way, and relation geometries with center approximations
#[derive(Debug, Clone)]
pub struct OverpassClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL for the map-data provider
    base_url: String,
}

impl OverpassClient {
    /// Create new map-data client
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the radius query for one tag expression
    /// DOCUMENTATION: Combines the three element kinds with the "around"
    /// filter; `out center` makes ways/relations report a center point
    pub fn build_query(tag: &str, lat: f64, lon: f64, radius_m: u32) -> String {
        format!(
            "[out:json][timeout:25];\n(\n    node[{tag}](around:{radius},{lat},{lon});\n    way[{tag}](around:{radius},{lat},{lon});\n    relation[{tag}](around:{radius},{lat},{lon});\n);\nout center;",
            tag = tag,
            radius = radius_m,
            lat = lat,
            lon = lon
        )
    }

    /// Fetch raw elements matching a tag around a coordinate
    ///
    /// # Arguments
    /// * `tag` - Tag expression from the category table (e.g., "amenity=cafe")
    /// * `lat` / `lon` - Resolved town center
    /// * `radius_m` - Search radius in meters
    ///
    /// # Returns
    /// Raw elements in provider order; coordinate handling is left to the
    /// normalizer
    pub async fn fetch_elements(
        &self,
        tag: &str,
        lat: f64,
        lon: f64,
        radius_m: u32,
    ) -> Result<Vec<RawMapElement>, PlacesError> {
        let url = format!("{}/api/interpreter", self.base_url);
        let query = Self::build_query(tag, lat, lon, radius_m);

        log::debug!(
            "Map-data fetch: tag={}, lat={}, lon={}, radius={}m",
            tag,
            lat,
            lon,
            radius_m
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "text/plain")
            .body(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log::error!("Map-data request timed out: {}", e);
                    PlacesError::UpstreamTimeout("Map-data request timed out".to_string())
                } else {
                    log::error!("Map-data request failed: {}", e);
                    PlacesError::UpstreamError(format!("Map-data request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            log::error!("Map-data provider returned status {}", status);
            return Err(PlacesError::UpstreamError(format!(
                "Failed to fetch places data (status {})",
                status
            )));
        }

        let body: OverpassResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse map-data response: {}", e);
            PlacesError::UpstreamError(format!("Failed to parse map-data response: {}", e))
        })?;

        log::info!(
            "Map-data fetch for tag '{}' returned {} elements",
            tag,
            body.elements.len()
        );

        Ok(body.elements)
    }
}
