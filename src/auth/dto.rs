use serde::{Deserialize, Serialize};

/// Request body for signup and login. Fields are optional so a missing
/// field is reported as a validation error instead of a JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
