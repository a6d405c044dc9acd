//! Backend account payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account payload returned by `accounts/current` or `accounts/demo`.
///
/// The landing page does not interpret the structure; the payload is handed
/// whole to the greeting view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(Value);

impl Account {
    /// Wraps a raw JSON payload.
    pub const fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Display name of the account owner, when the payload carries one.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The payload as served.
    pub const fn payload(&self) -> &Value {
        &self.0
    }

    /// Unwraps the payload.
    pub fn into_payload(self) -> Value {
        self.0
    }
}

impl From<Value> for Account {
    fn from(payload: Value) -> Self {
        Self(payload)
    }
}
