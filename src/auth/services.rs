use tracing::{info, warn};

use super::{
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::UserRepo,
};
use crate::error::ApiError;

/// Trimmed email and raw password, or a validation error when either is blank.
fn required_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ApiError> {
    let email = email.map(|e| e.trim().to_string()).unwrap_or_default();
    let password = password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("email and password are required"));
    }
    Ok((email, password))
}

pub async fn signup(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    email: Option<String>,
    password: Option<String>,
) -> Result<String, ApiError> {
    let (email, password) = required_credentials(email, password)?;

    if users.find_by_email(&email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(ApiError::Conflict("email already registered".into()));
    }

    let hash = hash_password(&password)?;
    // The unique index still decides when two signups race.
    let Some(user) = users.create(&email, &hash).await? else {
        warn!(%email, "email registered concurrently");
        return Err(ApiError::Conflict("email already registered".into()));
    };

    let token = keys.sign(user.id)?;
    info!(user_id = user.id, %email, "user registered");
    Ok(token)
}

pub async fn login(
    users: &dyn UserRepo,
    keys: &JwtKeys,
    email: Option<String>,
    password: Option<String>,
) -> Result<String, ApiError> {
    let (email, password) = required_credentials(email, password)?;

    let Some(user) = users.find_by_email(&email).await? else {
        warn!(%email, "login unknown email");
        return Err(ApiError::InvalidCredentials);
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.sign(user.id)?;
    info!(user_id = user.id, "user logged in");
    Ok(token)
}
