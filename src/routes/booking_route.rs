use crate::models::booking::{BookingView, CheckoutResponse, SeatToggleResponse, Upgrade, UpgradeOption};
use crate::models::search::{CitiesResponse, SearchDraft, CITIES};
use crate::services::catalog_service::CatalogService;
use crate::services::session_service::SessionStore;
use crate::utils::error::AppError;
use crate::utils::session::BookingSessionId;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// List cities, optionally leaving one out
///
/// The destination picker passes the chosen origin as `exclude`.
#[openapi(tag = "Search")]
#[get("/cities?<exclude>")]
pub async fn list_cities(exclude: Option<String>) -> Json<CitiesResponse> {
    let cities = CITIES
        .iter()
        .filter(|city| exclude.as_deref() != Some(**city))
        .map(|city| city.to_string())
        .collect();
    Json(CitiesResponse { cities })
}

/// Submit a trip search
#[openapi(tag = "Search")]
#[post("/search", format = "json", data = "<draft>")]
pub async fn submit_search(
    draft: Json<SearchDraft>,
    session: BookingSessionId,
    session_store: &State<SessionStore>,
) -> Result<Json<BookingView>, AppError> {
    let today = chrono::Local::now().date_naive();
    let criteria = draft.validate(today)?;
    Ok(Json(session_store.set_search(session.0, criteria).await))
}

/// Current booking state
#[openapi(tag = "Booking")]
#[get("/session")]
pub async fn get_session(
    session: BookingSessionId,
    session_store: &State<SessionStore>,
) -> Json<BookingView> {
    Json(session_store.view(session.0).await)
}

/// Start over
#[openapi(tag = "Booking")]
#[delete("/session")]
pub async fn reset_session(
    session: BookingSessionId,
    session_store: &State<SessionStore>,
) -> Json<BookingView> {
    Json(session_store.reset(session.0).await)
}

/// Choose the bus to book seats on
#[openapi(tag = "Booking")]
#[post("/session/bus/<bus_id>")]
pub async fn select_bus(
    bus_id: String,
    session: BookingSessionId,
    catalog_service: &State<CatalogService>,
    session_store: &State<SessionStore>,
) -> Result<Json<BookingView>, AppError> {
    let bus = catalog_service
        .find(&bus_id)
        .ok_or_else(|| AppError::NotFound(format!("Bus {} not found", bus_id)))?;
    Ok(Json(session_store.select_bus(session.0, bus).await))
}

/// Select or release a seat
///
/// Booked seats are left as they are; the response reports `rejected`.
#[openapi(tag = "Booking")]
#[post("/session/seats/<seat_id>")]
pub async fn toggle_seat(
    seat_id: u32,
    session: BookingSessionId,
    session_store: &State<SessionStore>,
) -> Result<Json<SeatToggleResponse>, AppError> {
    let response = session_store.toggle_seat(session.0, seat_id).await?;
    Ok(Json(response))
}

/// Available add-ons and their per-seat prices
#[openapi(tag = "Booking")]
#[get("/upgrades")]
pub async fn list_upgrades() -> Json<Vec<UpgradeOption>> {
    let options = Upgrade::iter()
        .map(|upgrade| UpgradeOption {
            upgrade,
            title: upgrade.title().to_string(),
            price_per_seat: upgrade.price_per_seat(),
        })
        .collect();
    Json(options)
}

/// Switch an add-on on or off
#[openapi(tag = "Booking")]
#[post("/session/upgrades/<upgrade>")]
pub async fn toggle_upgrade(
    upgrade: String,
    session: BookingSessionId,
    session_store: &State<SessionStore>,
) -> Result<Json<BookingView>, AppError> {
    let upgrade = Upgrade::from_str(&upgrade)
        .map_err(|_| AppError::BadRequest(format!("Unknown upgrade: {}", upgrade)))?;
    Ok(Json(session_store.toggle_upgrade(session.0, upgrade).await))
}

/// Proceed to payment
#[openapi(tag = "Booking")]
#[post("/session/checkout")]
pub async fn checkout(
    session: BookingSessionId,
    session_store: &State<SessionStore>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let response = session_store.checkout(session.0).await?;
    Ok(Json(response))
}
