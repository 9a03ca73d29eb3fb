// src/services/place_service.rs
// DOCUMENTATION: Business logic for place discovery
// PURPOSE: Compose resolver and fetcher, normalize raw elements, paginate

use crate::config::CategoryTable;
use crate::errors::PlacesError;
use crate::models::{PageResult, Place};
use crate::services::overpass_client::{OverpassClient, RawMapElement};
use crate::services::town_resolver::TownResolver;
use std::collections::HashMap;

pub struct PlaceService;

impl PlaceService {
    /// Find places near a town, one page at a time
    /// DOCUMENTATION: Runs the full pipeline for one request:
    /// category check -> town resolution -> map-data fetch -> normalize -> paginate
    /// The two upstream calls are strictly sequential; the second depends
    /// on the first's coordinates
    pub async fn search_places(
        resolver: &TownResolver,
        overpass: &OverpassClient,
        categories: &CategoryTable,
        radius_m: u32,
        town: &str,
        category: &str,
        page: i64,
        limit: i64,
    ) -> Result<PageResult, PlacesError> {
        let tag = categories.tag_for(category).ok_or_else(|| {
            PlacesError::InvalidInput(format!(
                "Invalid category '{}'. Available: {}",
                category,
                categories.valid_keys()
            ))
        })?;

        let location = resolver.resolve(town).await?;

        let elements = overpass
            .fetch_elements(tag, location.lat, location.lon, radius_m)
            .await?;

        let places: Vec<Place> = elements
            .into_iter()
            .filter_map(Self::normalize_element)
            .collect();

        Ok(Self::paginate(
            places,
            town,
            category,
            &location.display_name,
            page,
            limit,
        ))
    }

    /// Normalize one raw element into a Place
    /// DOCUMENTATION: Falls back to the computed center per coordinate
    /// component; elements missing either component are dropped entirely
    fn normalize_element(element: RawMapElement) -> Option<Place> {
        let lat = element
            .lat
            .or_else(|| element.center.as_ref().and_then(|c| c.lat))?;
        let lon = element
            .lon
            .or_else(|| element.center.as_ref().and_then(|c| c.lon))?;

        let tags = element.tags.unwrap_or_default();
        let name = tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| "Unnamed".to_string());
        let address = Self::format_address(&tags);

        Some(Place {
            id: element.id,
            name,
            lat,
            lon,
            address,
            tags,
        })
    }

    /// Format a display address from raw tags
    /// DOCUMENTATION: addr:full wins verbatim; otherwise housenumber,
    /// street, and city are joined in that order with ", "
    fn format_address(tags: &HashMap<String, String>) -> String {
        if let Some(full) = tags.get("addr:full") {
            return full.clone();
        }

        ["addr:housenumber", "addr:street", "addr:city"]
            .iter()
            .filter_map(|key| tags.get(*key).map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Slice the normalized list into one page
    /// DOCUMENTATION: Half-open index range [start, start+limit); requests
    /// past the end produce an empty page, not an error
    fn paginate(
        places: Vec<Place>,
        town: &str,
        category: &str,
        found_location: &str,
        page: i64,
        limit: i64,
    ) -> PageResult {
        let total_count = places.len();
        let total_pages = (total_count as f64 / limit as f64).ceil() as i64;

        let start = ((page - 1) * limit) as usize;
        let end = (start + limit as usize).min(places.len());
        let page_slice = if start < places.len() {
            places[start..end].to_vec()
        } else {
            Vec::new()
        };

        PageResult {
            town: town.to_string(),
            category: category.to_string(),
            found_location: found_location.to_string(),
            count: page_slice.len(),
            places: page_slice,
            total_count,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}
