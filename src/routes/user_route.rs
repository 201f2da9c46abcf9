use crate::models::user::{
    RegisterResponse, UserProfileResponse, UserRegistrationRequest, UserSigninRequest,
    UserSigninResponse,
};
use crate::services::user_service::UserService;
use crate::utils::error::AppError;
use crate::utils::jwt::AuthenticatedUser;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Register a new user
#[openapi(tag = "Users")]
#[post("/register", format = "json", data = "<request>")]
pub async fn register(
    request: Json<UserRegistrationRequest>,
    user_service: &State<UserService>,
) -> Result<Created<Json<RegisterResponse>>, AppError> {
    let user_id = user_service.register_user(request.into_inner()).await?;
    Ok(Created::new("/api/me").body(Json(RegisterResponse {
        user_id,
        status: "success".to_string(),
    })))
}

/// Sign in a user
#[openapi(tag = "Users")]
#[post("/signin", format = "json", data = "<request>")]
pub async fn signin(
    request: Json<UserSigninRequest>,
    user_service: &State<UserService>,
) -> Result<Json<UserSigninResponse>, AppError> {
    let response = user_service.signin_user(request.into_inner()).await?;
    Ok(Json(response))
}

/// The signed-in user's profile
#[openapi(tag = "Users")]
#[get("/me")]
pub async fn me(
    auth: AuthenticatedUser,
    user_service: &State<UserService>,
) -> Result<Json<UserProfileResponse>, AppError> {
    let profile = user_service.get_profile(auth.user_id).await?;
    Ok(Json(profile))
}
