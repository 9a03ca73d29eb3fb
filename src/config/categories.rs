// src/config/categories.rs
// DOCUMENTATION: Static category-to-tag configuration
// PURPOSE: Fixed mapping from category keys to map-data tag expressions

/// One searchable place category
/// DOCUMENTATION: Couples the public key/label with the provider tag filter
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Public category key used in API requests
    pub key: &'static str,
    /// Human-readable label for category listings
    pub label: &'static str,
    /// Map-data tag expression (e.g., "amenity=cafe")
    pub tag: &'static str,
}

/// Immutable category lookup table
/// DOCUMENTATION: Built once at startup and shared read-only between requests
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<Category>,
}

impl CategoryTable {
    /// Build the fixed category set
    pub fn new() -> Self {
        let entries = vec![
            Category { key: "cafe", label: "Cafés", tag: "amenity=cafe" },
            Category { key: "restaurant", label: "Restaurants", tag: "amenity=restaurant" },
            Category { key: "bar", label: "Bars & Pubs", tag: "amenity=bar" },
            Category { key: "barber", label: "Barbers & Hairdressers", tag: "shop=hairdresser" },
            Category { key: "coffeeshop", label: "Coffee Shops", tag: "amenity=cafe" },
            Category { key: "cinema", label: "Cinemas & Theatres", tag: "amenity=cinema" },
            Category { key: "toilet", label: "Public Toilets", tag: "amenity=toilets" },
            Category { key: "bakery", label: "Bakeries", tag: "shop=bakery" },
            Category { key: "pharmacy", label: "Pharmacies", tag: "amenity=pharmacy" },
            Category { key: "park", label: "Parks & Gardens", tag: "leisure=park" },
        ];

        Self { entries }
    }

    /// Look up the tag expression for a category key
    pub fn tag_for(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|category| category.key == key)
            .map(|category| category.tag)
    }

    /// All categories, in listing order
    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    /// Comma-separated list of valid keys, for error messages
    pub fn valid_keys(&self) -> String {
        self.entries
            .iter()
            .map(|category| category.key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}
