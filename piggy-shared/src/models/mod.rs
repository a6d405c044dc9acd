//! Data models for accounts, rates, sessions and display settings.

pub mod account;
pub mod display;
pub mod errors;
pub mod rates;
pub mod session;

pub use account::Account;
pub use display::{Currency, DisplayState};
pub use errors::{ApiError, ApiResult, SessionError, UiError};
pub use rates::{ConversionFactors, ExchangeRates, Rates};
pub use session::{BearerToken, Session};
