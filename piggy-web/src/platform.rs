//! # Collaborator Traits
//!
//! The landing flow never touches the browser directly. Everything it needs
//! from the outside world goes through these traits: the `browser` module
//! implements them with Keycloak, yew and gloo, tests implement them with
//! in-memory fakes.

use crate::models::{LandingView, LoginInput};
use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use piggy_shared::models::{
    Account, ApiResult, BearerToken, ExchangeRates, Session, SessionError, UiError,
};
use std::time::Duration;

/// Reaction slot callback registered with the identity provider.
pub type Reaction = Box<dyn Fn()>;

/// View mutation applied through [`LandingUi::update`].
pub type ViewChange = Box<dyn FnOnce(&mut LandingView)>;

/// How the identity provider resolves the session on page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnLoad {
    /// Silently check for an existing session without forcing a login
    CheckSso,
    /// Redirect to the login page when no session exists
    LoginRequired,
}

impl OnLoad {
    /// Option value passed to the identity provider.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheckSso => "check-sso",
            Self::LoginRequired => "login-required",
        }
    }
}

/// Third-party identity provider owning the session.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Resolve the session on page load.
    ///
    /// # Returns
    /// `true` when the client is already authenticated
    ///
    /// # Errors
    /// Returns [`SessionError::Init`] when the check itself fails.
    async fn init(&self, on_load: OnLoad) -> Result<bool, SessionError>;

    /// Start the external login flow.
    ///
    /// # Errors
    /// Returns [`SessionError::Redirect`] if the flow cannot be started.
    fn login(&self) -> Result<(), SessionError>;

    /// Start the external logout flow.
    ///
    /// # Errors
    /// Returns [`SessionError::Redirect`] if the flow cannot be started.
    fn logout(&self) -> Result<(), SessionError>;

    /// Whether a session is currently held.
    fn is_authenticated(&self) -> bool;

    /// Token and username of the current session, if authenticated.
    fn session(&self) -> Option<Session>;

    /// Replace the reaction fired after a successful authentication.
    fn set_on_auth_success(&self, reaction: Reaction);

    /// Replace the reaction fired when authentication fails.
    fn set_on_auth_error(&self, reaction: Reaction);
}

/// Backend account endpoints.
#[async_trait(?Send)]
pub trait AccountSource {
    /// `GET accounts/current` with the bearer token.
    async fn current_account(&self, token: &BearerToken) -> ApiResult<Account>;

    /// `GET accounts/demo`, unauthenticated.
    async fn demo_account(&self) -> ApiResult<Account>;
}

/// Exchange-rate service.
#[async_trait(?Send)]
pub trait RateSource {
    /// `GET latest` with RUB as base.
    async fn latest_rates(&self) -> ApiResult<ExchangeRates>;
}

/// The rendered landing page.
#[async_trait(?Send)]
pub trait LandingUi {
    /// Snapshot of the current flags.
    fn view(&self) -> LandingView;

    /// Apply `change` to the current flags and re-render.
    fn update(&self, change: ViewChange);

    /// Move keyboard focus to a login input.
    fn focus(&self, input: LoginInput);

    /// Empty both login inputs.
    fn clear_login_fields(&self);

    /// Show a blocking message.
    fn alert(&self, message: &str);

    /// Reload the page.
    fn reload(&self);

    /// The client user agent, when the browser exposes one.
    fn user_agent(&self) -> Option<String>;

    /// Remove the tap delay of touch input on the document body.
    fn enable_touch_input(&self);

    /// Resolves once the image at `src` has loaded.
    ///
    /// # Errors
    /// Returns [`UiError::ImageLoad`] if the browser reports a load error.
    async fn preload_image(&self, src: &str) -> Result<(), UiError>;
}

/// Single-threaded task spawning and timers.
///
/// Timers are fire-and-forget: nothing is cancelled or coalesced, the page
/// lifetime bounds them.
pub trait Scheduler {
    /// Run `task` to completion in the background.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Run `task` once `delay` has elapsed.
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Future resolving after `delay`.
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;
}
