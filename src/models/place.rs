// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for the API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Search query parameters
/// DOCUMENTATION: DTO for parsing the query string of GET /api/places
/// town and category are required but parsed as optional so a missing
/// parameter surfaces as our own error shape instead of an extractor error
#[derive(Debug, Deserialize, Validate)]
pub struct PlacesQuery {
    /// Free-text town name to search in
    pub town: Option<String>,

    /// Category key (must be one of the fixed category set)
    pub category: Option<String>,

    /// Page number (1-based, default 1)
    #[validate(range(min = 1, message = "page must be 1 or greater"))]
    pub page: Option<i64>,

    /// Results per page (1-100, default 20)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

/// A normalized point of interest
/// DOCUMENTATION: Uniform place record produced from heterogeneous
/// map-data elements; only emitted when both coordinates are known
#[derive(Debug, Clone, Serialize)]
pub struct Place {
    /// Provider-assigned numeric element id
    pub id: i64,

    /// Place name, or the literal "Unnamed" when no name tag exists
    pub name: String,

    /// Latitude (direct, or the element's computed center)
    pub lat: f64,

    /// Longitude (direct, or the element's computed center)
    pub lon: f64,

    /// Formatted address string (may be empty)
    pub address: String,

    /// Raw tag mapping as returned by the provider
    pub tags: HashMap<String, String>,
}

/// Paginated places response
/// DOCUMENTATION: DTO for returning one page of results with pagination metadata
#[derive(Debug, Serialize)]
pub struct PageResult {
    /// Town name as requested by the client
    pub town: String,

    /// Category key as requested by the client
    pub category: String,

    /// Display label of the resolved location
    pub found_location: String,

    /// Page slice of normalized places
    pub places: Vec<Place>,

    /// Number of places on this page
    pub count: usize,

    /// Total number of normalized places (regardless of pagination)
    pub total_count: usize,

    /// Current page number (1-based)
    pub page: i64,

    /// Results per page
    pub limit: i64,

    /// Total number of pages
    pub total_pages: i64,

    /// Whether more results exist on the next page
    pub has_next: bool,

    /// Whether a previous page exists
    pub has_prev: bool,
}
