// src/handlers/places.rs
// DOCUMENTATION: HTTP handler for place discovery
// PURPOSE: Parse requests, call services, return responses

use crate::config::{CategoryTable, Config};
use crate::errors::PlacesError;
use crate::models::PlacesQuery;
use crate::services::{OverpassClient, PlaceService, TownResolver};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /api/places
/// Find places in a town by category, paginated
pub async fn get_places(
    config: web::Data<Config>,
    categories: web::Data<CategoryTable>,
    resolver: web::Data<TownResolver>,
    overpass: web::Data<OverpassClient>,
    query: web::Query<PlacesQuery>,
) -> Result<impl Responder, PlacesError> {
    // Validate page/limit bounds before touching the pipeline
    if let Err(e) = query.validate() {
        return Err(PlacesError::InvalidInput(e.to_string()));
    }

    let query = query.into_inner();

    let (town, category) = match (query.town.as_deref(), query.category.as_deref()) {
        (Some(town), Some(category)) if !town.is_empty() && !category.is_empty() => {
            (town, category)
        }
        _ => {
            return Err(PlacesError::InvalidInput(
                "Missing town or category parameter".to_string(),
            ))
        }
    };

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(20);

    let result = PlaceService::search_places(
        resolver.get_ref(),
        overpass.get_ref(),
        categories.get_ref(),
        config.search_radius_m,
        town,
        category,
        page,
        limit,
    )
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/places", web::get().to(get_places));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::GeocodingClient;
    use actix_web::body::MessageBody;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer) -> Config {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 0,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            geocoding_base_url: server.uri(),
            overpass_base_url: server.uri(),
            user_agent: "ExploreTownApp/1.0".to_string(),
            upstream_timeout_secs: 5,
            search_radius_m: 5000,
        }
    }

    /// Wire the handler exactly as main does, against a mock provider
    async fn get_response(server: &MockServer, uri: &str) -> ServiceResponse<impl MessageBody> {
        let config = test_config(server);
        let http = reqwest::Client::new();
        let resolver = TownResolver::new(GeocodingClient::new(http.clone(), server.uri()));
        let overpass = OverpassClient::new(http, server.uri());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(CategoryTable::new()))
                .app_data(web::Data::new(resolver))
                .app_data(web::Data::new(overpass))
                .configure(super::config),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    fn mock_geocode_springfield() -> Mock {
        let body = serde_json::json!([
            {
                "display_name": "Springfield, Sangamon County, Illinois, USA",
                "type": "city",
                "importance": 0.72,
                "lat": "39.7817",
                "lon": "-89.6501"
            }
        ]);
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
    }

    #[actix_web::test]
    async fn test_get_places_happy_path() {
        let server = MockServer::start().await;
        mock_geocode_springfield().mount(&server).await;

        let overpass_body = serde_json::json!({
            "elements": [
                {
                    "type": "node",
                    "id": 1,
                    "lat": 39.79,
                    "lon": -89.64,
                    "tags": {
                        "name": "Corner Cafe",
                        "addr:housenumber": "5",
                        "addr:street": "Oak Ave"
                    }
                },
                {
                    "type": "way",
                    "id": 2,
                    "center": { "lat": 39.80, "lon": -89.66 },
                    "tags": { "amenity": "cafe" }
                },
                {
                    "type": "relation",
                    "id": 3,
                    "tags": { "name": "No Coordinates" }
                }
            ]
        });
        Mock::given(method("POST"))
            .and(path("/api/interpreter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&overpass_body))
            .mount(&server)
            .await;

        let resp = get_response(&server, "/api/places?town=Springfield&category=cafe").await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["town"], "Springfield");
        assert_eq!(body["category"], "cafe");
        assert_eq!(
            body["found_location"],
            "Springfield, Sangamon County, Illinois, USA"
        );
        // The coordinate-less relation is dropped before counting
        assert_eq!(body["total_count"], 2);
        assert_eq!(body["count"], 2);
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 20);
        assert_eq!(body["total_pages"], 1);
        assert_eq!(body["has_next"], false);
        assert_eq!(body["has_prev"], false);
        assert_eq!(body["places"][0]["name"], "Corner Cafe");
        assert_eq!(body["places"][0]["address"], "5, Oak Ave");
        assert_eq!(body["places"][1]["name"], "Unnamed");
        assert_eq!(body["places"][1]["lat"], 39.80);
    }

    #[actix_web::test]
    async fn test_get_places_unknown_category_lists_valid_keys() {
        let server = MockServer::start().await;

        let resp = get_response(&server, "/api/places?town=Springfield&category=spaceport").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("cafe"));
        assert!(message.contains("park"));

        // Rejected before any provider call
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_places_missing_parameters() {
        let server = MockServer::start().await;

        let resp = get_response(&server, "/api/places?category=cafe").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Missing town or category"));
    }

    #[actix_web::test]
    async fn test_get_places_malformed_town_name() {
        let server = MockServer::start().await;

        let resp = get_response(&server, "/api/places?town=Aaaaa&category=cafe").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_get_places_limit_out_of_range() {
        let server = MockServer::start().await;

        let resp =
            get_response(&server, "/api/places?town=Springfield&category=cafe&limit=101").await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[actix_web::test]
    async fn test_get_places_town_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let resp = get_response(&server, "/api/places?town=Atlantis&category=cafe").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_places_upstream_failure_is_500() {
        let server = MockServer::start().await;
        mock_geocode_springfield().mount(&server).await;

        Mock::given(method("POST"))
            .and(path("/api/interpreter"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let resp = get_response(&server, "/api/places?town=Springfield&category=cafe").await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }
}
