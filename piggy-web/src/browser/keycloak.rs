//! Bindings to the Keycloak JavaScript adapter loaded by the page.

use super::dom::js_message;
use crate::platform::{IdentityProvider, OnLoad, Reaction};
use async_trait::async_trait;
use js_sys::{Object, Promise, Reflect};
use log::{debug, warn};
use piggy_shared::models::{Session, SessionError};
use std::cell::RefCell;
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

#[wasm_bindgen]
extern "C" {
    type Keycloak;

    #[wasm_bindgen(constructor, catch)]
    fn new(config: &str) -> Result<Keycloak, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn init(this: &Keycloak, options: &Object) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn login(this: &Keycloak) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn logout(this: &Keycloak) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn authenticated(this: &Keycloak) -> Option<bool>;

    #[wasm_bindgen(method, getter)]
    fn token(this: &Keycloak) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = tokenParsed)]
    fn token_parsed(this: &Keycloak) -> JsValue;

    #[wasm_bindgen(method, setter, js_name = onAuthSuccess)]
    fn set_on_auth_success(this: &Keycloak, callback: &js_sys::Function);

    #[wasm_bindgen(method, setter, js_name = onAuthError)]
    fn set_on_auth_error(this: &Keycloak, callback: &js_sys::Function);
}

/// [`IdentityProvider`] backed by a `Keycloak` instance.
///
/// Reaction closures are kept here so they outlive the registration; the
/// adapter holds only JS references to them.
pub struct KeycloakIdentity {
    keycloak: Keycloak,
    on_success: RefCell<Option<Closure<dyn Fn()>>>,
    on_error: RefCell<Option<Closure<dyn Fn()>>>,
}

impl fmt::Debug for KeycloakIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeycloakIdentity")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl KeycloakIdentity {
    /// Constructs the adapter from its JSON config resource.
    ///
    /// # Errors
    /// Returns [`SessionError::Init`] when the adapter script is missing or
    /// rejects the config.
    pub fn new(config: &str) -> Result<Self, SessionError> {
        let keycloak =
            Keycloak::new(config).map_err(|err| SessionError::init(js_message(&err)))?;
        Ok(Self {
            keycloak,
            on_success: RefCell::new(None),
            on_error: RefCell::new(None),
        })
    }

    fn username(&self) -> Option<String> {
        Reflect::get(&self.keycloak.token_parsed(), &"preferred_username".into())
            .ok()
            .and_then(|value| value.as_string())
    }
}

/// Awaits a redirect promise in the background; it settles only if the
/// redirect does not happen.
fn watch_redirect(action: &'static str, promise: Result<Promise, JsValue>) -> Result<(), SessionError> {
    let promise = promise.map_err(|err| SessionError::redirect(js_message(&err)))?;
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            warn!("keycloak {action} failed: {}", js_message(&err));
        }
    });
    Ok(())
}

#[async_trait(?Send)]
impl IdentityProvider for KeycloakIdentity {
    async fn init(&self, on_load: OnLoad) -> Result<bool, SessionError> {
        let options = Object::new();
        Reflect::set(&options, &"onLoad".into(), &on_load.as_str().into())
            .map_err(|err| SessionError::init(js_message(&err)))?;

        let promise = self
            .keycloak
            .init(&options)
            .map_err(|err| SessionError::init(js_message(&err)))?;
        let authenticated = JsFuture::from(promise)
            .await
            .map_err(|err| SessionError::init(js_message(&err)))?;
        debug!("keycloak initialized: {authenticated:?}");
        Ok(authenticated.as_bool().unwrap_or(false))
    }

    fn login(&self) -> Result<(), SessionError> {
        watch_redirect("login", self.keycloak.login())
    }

    fn logout(&self) -> Result<(), SessionError> {
        watch_redirect("logout", self.keycloak.logout())
    }

    fn is_authenticated(&self) -> bool {
        self.keycloak.authenticated().unwrap_or(false)
    }

    fn session(&self) -> Option<Session> {
        if !self.is_authenticated() {
            return None;
        }
        let token = self.keycloak.token()?;
        Some(Session::new(token, self.username().unwrap_or_default()))
    }

    fn set_on_auth_success(&self, reaction: Reaction) {
        let closure = Closure::wrap(reaction);
        self.keycloak
            .set_on_auth_success(closure.as_ref().unchecked_ref());
        *self.on_success.borrow_mut() = Some(closure);
    }

    fn set_on_auth_error(&self, reaction: Reaction) {
        let closure = Closure::wrap(reaction);
        self.keycloak.set_on_auth_error(closure.as_ref().unchecked_ref());
        *self.on_error.borrow_mut() = Some(closure);
    }
}
