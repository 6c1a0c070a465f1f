use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::repos::Role;

/// Emails are stored and compared trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    #[serde(default)]
    #[validate(email(message = "'email' is not a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "'password' must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "'confirmPassword' must equal 'password'"))]
    pub confirm_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Caller-chosen role, `User` when absent. Self-registration may pick
    /// any role, `Admin` included; role checks only gate what a role may do.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "'email' must not be empty"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "'password' must not be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
