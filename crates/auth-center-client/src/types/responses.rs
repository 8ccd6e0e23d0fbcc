/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Response from `POST /api/auth/login`
///
/// The server reports the outcome inside the payload; `status` is a free
/// string and `mfa_token` is only present when a second factor is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_token: Option<String>,
}

impl LoginResponse {
    /// True when the login must be followed by MFA validation
    pub fn mfa_required(&self) -> bool {
        self.mfa_token.is_some()
    }
}

/// Response from `POST /api/auth/otp/validate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MfaValidateResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Response from the legacy `POST /api/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response from `POST /api/auth/otp/generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpGenerateResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_base32: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_auth_url: Option<String>,
}

/// Response from `POST /api/auth/otp/disable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpDisableResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
