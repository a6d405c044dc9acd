//! # Browser Bindings
//!
//! Implements the collaborator traits for a real page: Keycloak for the
//! session, a yewdux store for the view, gloo timers for the scheduler and
//! [`PiggyClient`] for HTTP. [`start`] is the wasm entry point.

mod components;
mod config;
mod dom;
mod keycloak;
mod scheduler;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub use components::{LandingApp, LandingAppProps};
pub use dom::BrowserUi;
pub use keycloak::KeycloakIdentity;
pub use scheduler::BrowserScheduler;

use crate::api::PiggyClient;
use crate::context::AppContext;
use crate::models::LandingView;
use crate::session::SessionBootstrapper;
use log::warn;
use piggy_shared::config::FrontendConfig;
use piggy_shared::models::{ApiError, DisplayState, SessionError};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use yew::Renderer;
use yewdux::Dispatch;

/// Reasons the landing page cannot be wired up.
#[derive(Error, Debug)]
pub enum StartupError {
    /// `window` is not defined
    #[error("No browser window available")]
    NoWindow,

    /// `location.href` threw
    #[error("Page URL unavailable: {0}")]
    PageUrl(String),

    /// The HTTP client could not be built
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The Keycloak adapter could not be constructed
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Builds the context for the running page and the bootstrapper driving it.
///
/// # Errors
/// Returns [`StartupError`] when the window, the page URL, the HTTP client or
/// the Keycloak client is unavailable.
pub fn connect(
    config: Rc<FrontendConfig>,
    view: Dispatch<LandingView>,
) -> Result<Rc<SessionBootstrapper>, StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let page_url = window
        .location()
        .href()
        .map_err(|err| StartupError::PageUrl(dom::js_message(&err)))?;

    let client = Rc::new(PiggyClient::from_config(&config, &page_url)?);
    let identity = Rc::new(KeycloakIdentity::new(&config.identity_config)?);

    let ctx = AppContext {
        display: Rc::new(RefCell::new(DisplayState::default())),
        identity,
        accounts: client.clone(),
        rates: client,
        ui: Rc::new(BrowserUi::new(window, view)),
        scheduler: Rc::new(BrowserScheduler),
        config,
    };
    Ok(SessionBootstrapper::new(ctx))
}

/// Wasm entry point: panic hook, console logging, then the landing app.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (FrontendConfig::default(), Some(err)),
    };
    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    if let Some(err) = config_error {
        warn!("{err}; using default configuration");
    }

    Renderer::<LandingApp>::with_props(LandingAppProps {
        config: Rc::new(config),
    })
    .render();
}
