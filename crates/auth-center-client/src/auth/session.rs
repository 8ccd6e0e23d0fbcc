/*
[INPUT]:  Access/refresh tokens and expiration timestamps
[OUTPUT]: Token retrieval and expiration status
[POS]:    Auth layer - session token lifecycle management
[UPDATE]: When adding token refresh or changing storage strategy
*/

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, RwLock};

/// Stored session tokens with metadata
#[derive(Debug, Clone)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Thread-safe session token store
#[derive(Debug, Clone)]
pub struct SessionTokens {
    data: Arc<RwLock<Option<TokenSet>>>,
}

impl SessionTokens {
    /// Create a new empty session store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store tokens with expiration
    pub fn set_tokens(
        &self,
        access_token: String,
        refresh_token: Option<String>,
        expires_seconds: u64,
    ) {
        let expires_at = Utc::now() + Duration::seconds(expires_seconds as i64);
        let token_set = TokenSet {
            access_token,
            refresh_token,
            expires_at,
        };

        let mut guard = self.data.write().unwrap();
        *guard = Some(token_set);
    }

    /// Get the current access token if available
    pub fn access_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|set| set.access_token.clone())
    }

    /// Get the current refresh token if available
    pub fn refresh_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().and_then(|set| set.refresh_token.clone())
    }

    /// Check if the access token is expired
    pub fn is_expired(&self) -> bool {
        let guard = self.data.read().unwrap();
        match guard.as_ref() {
            Some(set) => Utc::now() > set.expires_at,
            None => true,
        }
    }

    /// Get the full token set if available
    pub fn token_set(&self) -> Option<TokenSet> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// Clear the stored tokens
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for SessionTokens {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let session = SessionTokens::new();
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert!(session.is_expired());
    }

    #[test]
    fn test_set_and_get_tokens() {
        let session = SessionTokens::new();
        session.set_tokens("access".to_string(), Some("refresh".to_string()), 3600);

        assert_eq!(session.access_token(), Some("access".to_string()));
        assert_eq!(session.refresh_token(), Some("refresh".to_string()));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_missing_refresh_token() {
        let session = SessionTokens::new();
        session.set_tokens("access".to_string(), None, 3600);

        assert_eq!(session.access_token(), Some("access".to_string()));
        assert!(session.refresh_token().is_none());
    }

    #[test]
    fn test_clear_tokens() {
        let session = SessionTokens::new();
        session.set_tokens("access".to_string(), Some("refresh".to_string()), 3600);

        session.clear();
        assert!(session.access_token().is_none());
        assert!(session.is_expired());
    }

    #[test]
    fn test_already_expired_tokens() {
        let session = SessionTokens::new();
        session.set_tokens("access".to_string(), None, 0);
        // A zero lifetime puts expires_at at (or before) now.
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(session.is_expired());
    }
}
