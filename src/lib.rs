#[macro_use]
extern crate rocket;
extern crate rocket_okapi;

pub mod client;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::catalog_service::CatalogService;
use crate::services::seat_service::SeatLayout;
use crate::services::session_service::SessionStore;
use crate::services::user_service::UserService;
use rocket::fairing::AdHoc;
use rocket::http::Header;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};
use sqlx::SqlitePool;

pub fn swagger_ui() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/api/openapi.json".to_string(),
        ..Default::default()
    }
}

/// Assemble the Rocket instance: managed services, routes and the CORS fairing.
///
/// The identity endpoints and the bus lookup are reachable both at the root
/// (`/register`, `/signin`, `/bus/<id>`) and under `/api`.
pub fn build_rocket(config: AppConfig, pool: SqlitePool) -> Rocket<Build> {
    let user_service = UserService::new(pool, config.jwt_secret.clone(), config.bcrypt_cost);
    let catalog_service = CatalogService::with_fixtures();
    let session_store = SessionStore::new(SeatLayout::standard(), config.tax_rate)
        .with_ttl(config.session_ttl);

    let figment = rocket::Config::figment().merge(("port", config.port));
    let cors_origin = config.cors_origin.clone();

    rocket::custom(figment)
        .manage(config)
        .manage(user_service)
        .manage(catalog_service)
        .manage(session_store)
        .mount(
            "/",
            routes![
                routes::user_route::register,
                routes::user_route::signin,
                routes::bus_route::get_bus,
            ],
        )
        .mount(
            "/api",
            openapi_get_routes![
                routes::user_route::register,
                routes::user_route::signin,
                routes::user_route::me,
                routes::bus_route::list_buses,
                routes::bus_route::get_bus,
                routes::booking_route::list_cities,
                routes::booking_route::submit_search,
                routes::booking_route::get_session,
                routes::booking_route::reset_session,
                routes::booking_route::select_bus,
                routes::booking_route::toggle_seat,
                routes::booking_route::list_upgrades,
                routes::booking_route::toggle_upgrade,
                routes::booking_route::checkout,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger_ui()))
        .attach(AdHoc::on_response("CORS", move |_, res| {
            let origin = cors_origin.clone();
            Box::pin(async move {
                if origin != "*" {
                    res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
                }
                res.set_header(Header::new("Access-Control-Allow-Origin", origin));
            })
        }))
}
