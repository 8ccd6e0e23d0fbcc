/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public auth-center client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthFlow,
    SessionTokens,
    TokenSet,
};

// Re-export commonly used types from http
pub use http::{
    AuthCenterClient,
    AuthCenterError,
    ClientConfig,
    Result,
};

// Re-export all payload types
pub use types::*;
