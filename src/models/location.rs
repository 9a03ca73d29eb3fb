// src/models/location.rs
// DOCUMENTATION: Resolved town location
// PURPOSE: Coordinate pair handed from the town resolver to the place fetcher

/// The single best-guess location for a town name
/// DOCUMENTATION: Produced by the town resolver, consumed by the place fetcher
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    /// Latitude of the resolved town center
    pub lat: f64,

    /// Longitude of the resolved town center
    pub lon: f64,

    /// Human-readable label of the match (provider display name)
    pub display_name: String,
}
