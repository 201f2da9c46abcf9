use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::utils::error::{AppError, AppResult};

pub const CITIES: [&str; 12] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Pune",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Ahmedabad",
    "Surat",
    "Jaipur",
    "Lucknow",
    "Kanpur",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

// The search form as submitted; any field may still be blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct SearchDraft {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
}

impl SearchDraft {
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    /// Turn the draft into search criteria.
    ///
    /// Every field must be filled, both cities must be known, the destination
    /// must differ from the origin and the date must not lie before `today`.
    pub fn validate(&self, today: NaiveDate) -> AppResult<SearchCriteria> {
        let origin = required(&self.origin, "origin")?;
        let destination = required(&self.destination, "destination")?;
        let date = self
            .date
            .ok_or_else(|| AppError::ValidationError("date is required".into()))?;

        for city in [&origin, &destination] {
            if !CITIES.contains(&city.as_str()) {
                return Err(AppError::ValidationError(format!("Unknown city: {}", city)));
            }
        }
        if origin == destination {
            return Err(AppError::ValidationError(
                "Destination must differ from origin".into(),
            ));
        }
        if date < today {
            return Err(AppError::ValidationError(
                "Journey date cannot be in the past".into(),
            ));
        }

        Ok(SearchCriteria {
            origin,
            destination,
            date,
        })
    }
}

fn required(value: &Option<String>, field: &str) -> AppResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::ValidationError(format!("{} is required", field))),
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}
