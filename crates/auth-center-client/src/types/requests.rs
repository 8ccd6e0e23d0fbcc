/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/otp/validate`
///
/// `token` carries the one-time code; `user_id` is the subject
/// extracted from the MFA token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MfaValidateRequest {
    pub user_id: String,
    pub token: String,
}

/// Body for the legacy `POST /api/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordLoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /api/auth/otp/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpGenerateRequest {
    pub email: String,
    pub user_id: String,
}

/// Body for `POST /api/auth/otp/disable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpDisableRequest {
    pub user_id: String,
}
