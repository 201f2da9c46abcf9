use crate::models::bus::{
    BusListResponse, BusOffer, BusTypeFilter, CatalogQuery, DepartureSlot, SortKey,
    DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
use crate::services::catalog_service::CatalogService;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use std::str::FromStr;

/// List buses, filtered and sorted
///
/// `amenities` and `operators` are comma separated lists.
#[openapi(tag = "Buses")]
#[get("/buses?<bus_type>&<min_price>&<max_price>&<sort>&<departure>&<amenities>&<operators>")]
#[allow(clippy::too_many_arguments)]
pub async fn list_buses(
    bus_type: Option<String>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    sort: Option<String>,
    departure: Option<String>,
    amenities: Option<String>,
    operators: Option<String>,
    catalog_service: &State<CatalogService>,
) -> Result<Json<BusListResponse>, AppError> {
    let query = CatalogQuery {
        bus_type: parse_choice::<BusTypeFilter>(bus_type, "bus type")?,
        min_price: min_price.unwrap_or(DEFAULT_MIN_PRICE),
        max_price: max_price.unwrap_or(DEFAULT_MAX_PRICE),
        departure: parse_choice::<DepartureSlot>(departure, "departure slot")?,
        amenities: split_list(amenities),
        operators: split_list(operators),
        sort: parse_choice::<SortKey>(sort, "sort key")?,
    };

    if query.min_price > query.max_price {
        return Err(AppError::BadRequest("min_price must not exceed max_price".into()));
    }

    Ok(Json(catalog_service.list(&query)))
}

/// Get a single bus
#[openapi(tag = "Buses")]
#[get("/bus/<bus_id>")]
pub async fn get_bus(
    bus_id: String,
    catalog_service: &State<CatalogService>,
) -> Result<Json<BusOffer>, AppError> {
    catalog_service
        .find(&bus_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Bus {} not found", bus_id)))
}

fn parse_choice<T: FromStr + Default>(raw: Option<String>, what: &str) -> Result<T, AppError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(value) => T::from_str(value)
            .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", what, value))),
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
