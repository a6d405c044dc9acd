//! PiggyBank landing page.
//!
//! The page flow (mobile detection, exchange rates, session bootstrap, account
//! loading, login form and card effects) is written against the traits in
//! [`platform`] and runs natively in tests. The [`browser`] module binds those
//! traits to Keycloak, yew and gloo when built for `wasm32`.

pub mod api;
pub mod context;
pub mod effects;
pub mod greeting;
pub mod mobile;
pub mod models;
pub mod platform;
pub mod presenter;
pub mod rates;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod browser;

#[cfg(test)]
mod test_support;

pub use context::AppContext;
pub use session::{Phase, SessionBootstrapper};
