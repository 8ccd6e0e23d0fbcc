/*
[INPUT]:  Credentials, MFA tokens and one-time codes
[OUTPUT]: Parsed auth responses, session tokens on success
[POS]:    Auth layer - endpoint wrappers and login flow orchestration
[UPDATE]: When auth endpoints or flow steps change
*/

use base64::{
    Engine as _,
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
};
use reqwest::Method;

use crate::http::{AuthCenterClient, AuthCenterError, Result};
use crate::types::{
    LoginRequest, LoginResponse, MfaValidateRequest, MfaValidateResponse, OtpDisableRequest,
    OtpDisableResponse, OtpGenerateRequest, OtpGenerateResponse, PasswordLoginRequest,
    TokenResponse,
};

use super::SessionTokens;

/// Access tokens issued after MFA validation live 24 hours.
const ACCESS_TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;

/// Wraps the auth-center endpoints and the MFA login flow
#[derive(Debug, Clone)]
pub struct AuthFlow {
    client: AuthCenterClient,
    session: SessionTokens,
}

impl AuthFlow {
    /// Create a new auth flow over the given client
    pub fn new(client: AuthCenterClient) -> Self {
        Self {
            client,
            session: SessionTokens::new(),
        }
    }

    /// Get the session token store
    pub fn session(&self) -> &SessionTokens {
        &self.session
    }

    /// Step 1: Login with email and password
    ///
    /// POST /api/auth/login
    ///
    /// The HTTP status is not checked; the server reports the outcome inside
    /// the JSON payload, which is returned to the caller unchanged.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        let builder = self
            .client
            .api_request(Method::POST, "/api/auth/login")?
            .json(credentials);
        self.client.send_json(builder).await
    }

    /// Step 2: Validate the one-time code against the MFA token
    ///
    /// POST /api/auth/otp/validate
    /// Requires: Authorization bearer header carrying the MFA token
    ///
    /// The `user_id` sent in the body is the `sub` claim extracted from the
    /// MFA token. The HTTP status is not checked.
    pub async fn verify_mfa(&self, mfa_token: &str, mfa_code: &str) -> Result<MfaValidateResponse> {
        let user_id = extract_subject_from_token(mfa_token)?;
        let body = MfaValidateRequest {
            user_id,
            token: mfa_code.to_string(),
        };

        let builder = self
            .client
            .api_request(Method::POST, "/api/auth/otp/validate")?
            .bearer_auth(mfa_token)
            .json(&body);
        self.client.send_json(builder).await
    }

    /// Login against the legacy endpoint
    ///
    /// POST /api/login
    ///
    /// Unlike the MFA-aware endpoints this one rejects on non-2xx status.
    pub async fn login_with_password(
        &self,
        credentials: &PasswordLoginRequest,
    ) -> Result<TokenResponse> {
        let builder = self
            .client
            .api_request(Method::POST, "/api/login")?
            .json(credentials);
        self.client.send_json_checked(builder).await
    }

    /// Enroll a TOTP secret for a user
    ///
    /// POST /api/auth/otp/generate
    /// Requires: Authorization bearer header carrying an access token
    pub async fn generate_otp(
        &self,
        access_token: &str,
        request: &OtpGenerateRequest,
    ) -> Result<OtpGenerateResponse> {
        let builder = self
            .client
            .api_request(Method::POST, "/api/auth/otp/generate")?
            .bearer_auth(access_token)
            .json(request);
        self.client.send_json(builder).await
    }

    /// Disable TOTP for a user
    ///
    /// POST /api/auth/otp/disable
    /// Requires: Authorization bearer header carrying an access token
    pub async fn disable_otp(
        &self,
        access_token: &str,
        user_id: &str,
    ) -> Result<OtpDisableResponse> {
        let body = OtpDisableRequest {
            user_id: user_id.to_string(),
        };

        let builder = self
            .client
            .api_request(Method::POST, "/api/auth/otp/disable")?
            .bearer_auth(access_token)
            .json(&body);
        self.client.send_json(builder).await
    }

    /// Complete MFA login flow
    ///
    /// 1. Login with email and password
    /// 2. Require an MFA token in the response
    /// 3. Validate the one-time code
    /// 4. Store the returned tokens in the session
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        mfa_code: &str,
    ) -> Result<MfaValidateResponse> {
        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        // Step 1: Login
        let login_response = self.login(&credentials).await?;

        // Step 2: The flow only proceeds when a second factor is pending
        let Some(mfa_token) = login_response.mfa_token.clone() else {
            let message = login_response
                .message
                .unwrap_or_else(|| login_response.status.clone());
            return Err(AuthCenterError::Authentication { message });
        };

        // Step 3: Validate the one-time code
        let mfa_response = self.verify_mfa(&mfa_token, mfa_code).await?;

        // Step 4: Store tokens
        match mfa_response.access_token.clone() {
            Some(access_token) => {
                self.session.set_tokens(
                    access_token,
                    mfa_response.refresh_token.clone(),
                    ACCESS_TOKEN_TTL_SECONDS,
                );
                Ok(mfa_response)
            }
            None => {
                let message = mfa_response
                    .message
                    .unwrap_or_else(|| mfa_response.status.clone());
                Err(AuthCenterError::Authentication { message })
            }
        }
    }
}

/// Extract the `sub` claim from a JWT without verifying its signature.
/// The caller only needs the subject to echo it back to the server.
fn extract_subject_from_token(token: &str) -> Result<String> {
    let token = token.trim();
    let payload_b64 = token.split('.').nth(1).ok_or_else(|| {
        AuthCenterError::InvalidResponse("MFA token is not a valid JWT".to_string())
    })?;

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .or_else(|_| URL_SAFE.decode(payload_b64))
        .map_err(|e| {
            AuthCenterError::InvalidResponse(format!("Invalid MFA token payload base64: {e}"))
        })?;

    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes)?;
    let subject = payload
        .get("sub")
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            AuthCenterError::InvalidResponse("MFA token missing 'sub' claim".to_string())
        })?;

    Ok(subject.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn make_test_jwt(sub: &str) -> String {
        let header = serde_json::json!({"alg": "none", "typ": "JWT"});
        let payload = serde_json::json!({"sub": sub, "exp": 2_000_000_000usize});

        let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header).unwrap());
        let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());

        format!("{header_b64}.{payload_b64}.signature")
    }

    #[test]
    fn test_extract_subject_from_token() {
        let jwt = make_test_jwt("f47ac10b-58cc-4372-a567-0e02b2c3d479");
        let subject = extract_subject_from_token(&jwt).unwrap();
        assert_eq!(subject, "f47ac10b-58cc-4372-a567-0e02b2c3d479");
    }

    #[test]
    fn test_extract_subject_rejects_non_jwt() {
        let err = extract_subject_from_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, AuthCenterError::InvalidResponse(_)));
    }

    #[test]
    fn test_extract_subject_rejects_missing_sub() {
        let payload = serde_json::json!({"exp": 2_000_000_000usize});
        let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        let jwt = format!("header.{payload_b64}.signature");

        let err = extract_subject_from_token(&jwt).unwrap_err();
        match err {
            AuthCenterError::InvalidResponse(msg) => assert!(msg.contains("sub")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_subject_accepts_padded_base64() {
        let payload = serde_json::json!({"sub": "user-1"});
        let payload_b64 = URL_SAFE.encode(serde_json::to_vec(&payload).unwrap());
        let jwt = format!("header.{payload_b64}.signature");

        assert_eq!(extract_subject_from_token(&jwt).unwrap(), "user-1");
    }
}
