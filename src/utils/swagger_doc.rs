use crate::utils::error::AppError;
use rocket_okapi::okapi::openapi3::{Response, Responses, MediaType};
use rocket_okapi::response::OpenApiResponderInner;
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::RefOr;
use okapi::openapi3::SchemaObject;
use indexmap::IndexMap;
use serde_json::json;

// Documented error bodies, one per status AppError can produce
fn documented_errors() -> [(&'static str, AppError); 6] {
    [
        ("Missing or invalid input", AppError::ValidationError("Passwords do not match".into())),
        ("Missing or invalid credentials", AppError::AuthError("Invalid credentials".into())),
        ("Unknown bus or user", AppError::NotFound("Bus 42 not found".into())),
        ("Conflicting state", AppError::Conflict("Email already exists".into())),
        ("Booking cannot proceed", AppError::Unprocessable("Please select at least one seat".into())),
        ("Storage failure", AppError::DatabaseError("connection closed".into())),
    ]
}

impl OpenApiResponderInner for AppError {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let mut responses = Responses::default();

        for (description, error) in documented_errors() {
            let mut content = IndexMap::new();
            content.insert(
                "application/json".to_string(),
                MediaType {
                    schema: Some(SchemaObject::default()),
                    example: Some(json!({ "error": error.to_string() })),
                    ..Default::default()
                },
            );

            responses.responses.insert(
                error.status().code.to_string(),
                RefOr::Object(Response {
                    description: description.to_string(),
                    content,
                    ..Default::default()
                }),
            );
        }

        Ok(responses)
    }
}
