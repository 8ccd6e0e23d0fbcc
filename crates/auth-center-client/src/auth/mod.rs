/*
[INPUT]:  Credentials and one-time codes
[OUTPUT]: Parsed auth responses and stored session tokens
[POS]:    Auth layer - handles auth-center API authentication
[UPDATE]: When auth endpoints or flow steps change
*/

pub mod flow;
pub mod session;

pub use flow::AuthFlow;
pub use session::{SessionTokens, TokenSet};
