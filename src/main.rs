// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, provider clients, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{CategoryTable, Config};
use dotenv::dotenv;
use services::{GeocodingClient, OverpassClient, TownResolver};
use std::io;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        // We continue but log error, or we could panic
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting explore-town service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );
    log::info!(
        "Providers: geocoding={}, map-data={}",
        config.geocoding_base_url,
        config.overpass_base_url
    );

    // 4. Build the shared HTTP client for upstream providers
    // Carries the application User-Agent and the per-call timeout
    let http_client = match reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // 5. Build the immutable category table and provider clients
    let categories = CategoryTable::new();
    log::info!("Loaded {} place categories", categories.entries().len());

    let resolver = TownResolver::new(GeocodingClient::new(
        http_client.clone(),
        config.geocoding_base_url.clone(),
    ));
    let overpass = OverpassClient::new(http_client, config.overpass_base_url.clone());

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (config, categories, and provider clients)
            .app_data(web::Data::new(config_clone.clone()))
            .app_data(web::Data::new(categories.clone()))
            .app_data(web::Data::new(resolver.clone()))
            .app_data(web::Data::new(overpass.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::categories_config)
            .configure(handlers::places_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
