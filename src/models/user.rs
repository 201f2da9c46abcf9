use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use schemars::JsonSchema;
use validator::Validate;

#[allow(dead_code)]
#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

// Missing fields deserialize as empty strings so they surface as 400s, not parse failures
#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct UserRegistrationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,

    #[serde(default)]
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserSigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UserSigninResponse {
    pub name: String,
    pub email: String,
    pub token: String,
}

#[derive(Debug, Serialize, JsonSchema)]
#[schemars(example = "RegisterResponse::example")]
pub struct RegisterResponse {
    #[schemars(title = "User ID")]
    pub user_id: i64,

    #[schemars(title = "Register Status")]
    pub status: String,
}

impl RegisterResponse {
    pub fn example() -> Self {
        Self {
            user_id: 123,
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct UserProfileResponse {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}
