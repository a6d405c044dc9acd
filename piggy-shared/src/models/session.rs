//! Identity-provider session facts.

use std::fmt;

/// Opaque credential attached to authenticated backend requests.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// The facts this page reads from an authenticated identity-provider session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Access token for backend calls
    pub token: BearerToken,
    /// `preferred_username` claim of the parsed token
    pub username: String,
}

impl Session {
    /// Builds a session from a raw token and username.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: BearerToken::new(token),
            username: username.into(),
        }
    }
}
