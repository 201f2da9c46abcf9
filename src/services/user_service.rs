use crate::models::user::{
    User, UserProfileResponse, UserRegistrationRequest, UserSigninRequest, UserSigninResponse,
};
use crate::utils::error::{AppError, AppResult};
use crate::utils::jwt;
use bcrypt::{hash, verify};
use sqlx::SqlitePool;
use validator::Validate;

pub struct UserService {
    pool: SqlitePool,
    jwt_secret: String,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(pool: SqlitePool, jwt_secret: String, bcrypt_cost: u32) -> Self {
        UserService {
            pool,
            jwt_secret,
            bcrypt_cost,
        }
    }

    // Register a new user
    pub async fn register_user(&self, request: UserRegistrationRequest) -> AppResult<i64> {
        request.validate()?;

        if request.password != request.confirm_password {
            return Err(AppError::ValidationError("Passwords do not match".into()));
        }

        let email = request.email.trim().to_lowercase();

        // Check if email already exists
        let existing_user = sqlx::query("SELECT id FROM user WHERE email = ?")
            .bind(&email)
            .fetch_optional(&self.pool)
            .await?;

        if existing_user.is_some() {
            return Err(AppError::Conflict("Email already exists".into()));
        }

        // Hash password
        let hashed_password = hash(request.password.as_bytes(), self.bcrypt_cost)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let result = sqlx::query(
            "INSERT INTO user (full_name, email, phone, password, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(request.full_name.trim())
        .bind(&email)
        .bind(request.phone.trim())
        .bind(hashed_password)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration for the same email
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Email already exists".into())
            }
            other => AppError::from(other),
        })?;

        let user_id = result.last_insert_rowid();
        tracing::info!(user_id, "user registered");

        Ok(user_id)
    }

    // Sign in user
    pub async fn signin_user(&self, request: UserSigninRequest) -> AppResult<UserSigninResponse> {
        let email = request.email.trim().to_lowercase();

        let user = self
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid credentials".into()))?;

        // Verify password
        let password_matches = verify(request.password.as_bytes(), &user.password)
            .map_err(|e| AppError::AuthError(e.to_string()))?;

        if !password_matches {
            tracing::warn!(user_id = user.id, "sign-in rejected");
            return Err(AppError::AuthError("Invalid credentials".into()));
        }

        // Generate JWT token
        let token = jwt::generate_token(user.id, &self.jwt_secret)
            .map_err(|e| AppError::AuthError(e.to_string()))?;

        tracing::info!(user_id = user.id, "user signed in");

        Ok(UserSigninResponse {
            name: user.full_name,
            email: user.email,
            token,
        })
    }

    pub async fn get_profile(&self, user_id: i64) -> AppResult<UserProfileResponse> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, phone, password, created_at FROM user WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(UserProfileResponse {
            user_id: user.id,
            name: user.full_name,
            email: user.email,
            phone: user.phone,
        })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, full_name, email, phone, password, created_at FROM user WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
