// src/services/town_resolver.rs
// DOCUMENTATION: Town name resolution
// PURPOSE: Validate a free-text town name and pick the best geocoding match

use crate::errors::PlacesError;
use crate::models::ResolvedLocation;
use crate::services::geocoding_client::{GeocodeCandidate, GeocodingClient};

/// Place types accepted in the first selection pass
const SETTLEMENT_TYPES: [&str; 6] = [
    "city",
    "town",
    "village",
    "municipality",
    "hamlet",
    "suburb",
];

/// Keywords scanned for in display names during the second pass
const SETTLEMENT_KEYWORDS: [&str; 3] = ["city", "town", "village"];

/// Maximum candidates requested from the geocoding provider
const MAX_CANDIDATES: u8 = 5;

/// Validate a raw town name before any network call
/// DOCUMENTATION: Rejects inputs that cannot be a real town name:
/// - trimmed length below 3 characters
/// - any character repeated 3+ times in a row (keyboard mashing)
/// - a bare 1-2 letter token once internal spaces are removed ("NY", "N Y")
///
/// Returns the trimmed name on success.
pub fn validate_town_name(raw: &str) -> Result<&str, PlacesError> {
    let trimmed = raw.trim();

    if trimmed.chars().count() < 3 {
        return Err(PlacesError::InvalidInput(
            "Town name must be at least 3 characters long".to_string(),
        ));
    }

    if has_repeated_run(trimmed) {
        return Err(PlacesError::InvalidInput(
            "Town name looks invalid (repeated characters)".to_string(),
        ));
    }

    let spaceless: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if spaceless.chars().count() <= 2 {
        return Err(PlacesError::InvalidInput(
            "Town name is too short - please spell it out".to_string(),
        ));
    }

    Ok(trimmed)
}

/// True when any character appears 3 or more times in a row
/// Case-insensitive so "Aaaaa" and "aaaaa" behave identically
fn has_repeated_run(name: &str) -> bool {
    let mut run_len = 0usize;
    let mut previous: Option<char> = None;

    for c in name.chars().flat_map(char::to_lowercase) {
        if previous == Some(c) {
            run_len += 1;
            if run_len >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run_len = 1;
        }
    }

    false
}

/// Pick the best candidate from the provider's result list
/// DOCUMENTATION: Three discrete passes over the candidates in provider
/// order; the first hit of the earliest pass wins:
/// 1. settlement place type with importance above 0.1
/// 2. display name mentioning city/town/village with importance above 0.05
/// 3. any candidate with importance above 0.3
pub fn select_candidate(candidates: &[GeocodeCandidate]) -> Option<&GeocodeCandidate> {
    if let Some(candidate) = candidates.iter().find(|c| {
        SETTLEMENT_TYPES.contains(&c.place_type.as_str()) && c.importance > 0.1
    }) {
        return Some(candidate);
    }

    if let Some(candidate) = candidates.iter().find(|c| {
        let display = c.display_name.to_lowercase();
        SETTLEMENT_KEYWORDS.iter().any(|kw| display.contains(kw)) && c.importance > 0.05
    }) {
        return Some(candidate);
    }

    candidates.iter().find(|c| c.importance > 0.3)
}

/// Town resolver service
/// DOCUMENTATION: Front half of the request pipeline; turns a town name
/// into a single coordinate pair plus display label
#[derive(Debug, Clone)]
pub struct TownResolver {
    geocoding: GeocodingClient,
}

impl TownResolver {
    /// Create new resolver backed by a geocoding client
    pub fn new(geocoding: GeocodingClient) -> Self {
        Self { geocoding }
    }

    /// Resolve a town name to a location
    /// DOCUMENTATION: Validates the name, queries up to 5 candidates,
    /// and applies the tiered selection heuristic
    pub async fn resolve(&self, raw_name: &str) -> Result<ResolvedLocation, PlacesError> {
        let name = validate_town_name(raw_name)?;

        let candidates = self.geocoding.search(name, MAX_CANDIDATES).await?;

        if candidates.is_empty() {
            log::info!("No geocoding candidates for town '{}'", name);
            return Err(PlacesError::NotFound(format!("Town '{}' not found", name)));
        }

        let chosen = select_candidate(&candidates).ok_or_else(|| {
            log::info!(
                "No candidate for '{}' passed selection ({} rejected)",
                name,
                candidates.len()
            );
            PlacesError::NotFound(
                "No valid town found - please check the spelling".to_string(),
            )
        })?;

        let lat: f64 = chosen.lat.parse().map_err(|_| {
            PlacesError::UpstreamError(format!(
                "Geocoder returned unparsable latitude '{}'",
                chosen.lat
            ))
        })?;
        let lon: f64 = chosen.lon.parse().map_err(|_| {
            PlacesError::UpstreamError(format!(
                "Geocoder returned unparsable longitude '{}'",
                chosen.lon
            ))
        })?;

        log::info!(
            "Resolved town '{}' to '{}' ({}, {})",
            name,
            chosen.display_name,
            lat,
            lon
        );

        Ok(ResolvedLocation {
            lat,
            lon,
            display_name: chosen.display_name.clone(),
        })
    }
}
