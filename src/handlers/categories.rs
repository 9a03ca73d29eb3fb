// src/handlers/categories.rs
// DOCUMENTATION: Category listing handler
// PURPOSE: Expose the fixed category set to clients

use crate::config::CategoryTable;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

/// One entry of the category listing
#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    /// Category key accepted by GET /api/places
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

/// Response for the category listing endpoint
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// All available categories, in listing order
    pub categories: Vec<CategoryEntry>,
}

/// GET /api/categories
/// List all available categories
pub async fn get_categories(categories: web::Data<CategoryTable>) -> impl Responder {
    let entries = categories
        .entries()
        .iter()
        .map(|category| CategoryEntry {
            key: category.key,
            label: category.label,
        })
        .collect();

    HttpResponse::Ok().json(CategoriesResponse {
        categories: entries,
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/categories", web::get().to(get_categories));
}
