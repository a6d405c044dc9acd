mod app;
mod greeting_page;
mod login_page;
mod preloader;

pub use app::{LandingApp, LandingAppProps};
pub use greeting_page::GreetingPage;
pub use login_page::LoginPage;
pub use preloader::Preloader;

use crate::session::SessionBootstrapper;
use crate::{effects, presenter};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, MouseEvent};

/// Page controls bound to the running bootstrapper.
#[derive(Debug, Clone)]
pub struct LandingActions {
    bootstrapper: Rc<SessionBootstrapper>,
}

impl PartialEq for LandingActions {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.bootstrapper, &other.bootstrapper)
    }
}

impl LandingActions {
    /// Binds the controls to `bootstrapper`.
    pub fn new(bootstrapper: Rc<SessionBootstrapper>) -> Self {
        Self { bootstrapper }
    }

    fn callback(&self, action: impl Fn(&Rc<SessionBootstrapper>) + 'static) -> Callback<MouseEvent> {
        let bootstrapper = Rc::clone(&self.bootstrapper);
        Callback::from(move |_: MouseEvent| action(&bootstrapper))
    }

    /// Login button.
    pub fn login(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| bootstrapper.login())
    }

    /// Logout button.
    pub fn logout(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| bootstrapper.logout())
    }

    /// Demo account button.
    pub fn demo(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| {
            let bootstrapper = Rc::clone(bootstrapper);
            spawn_local(async move { bootstrapper.demo().await });
        })
    }

    /// Skip link of the registration card.
    pub fn skip_mail(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| bootstrapper.skip_mail())
    }

    /// Mouse entering the piggy.
    pub fn hover_shake(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| {
            presenter::hover_shake(bootstrapper.context());
        })
    }

    /// Next arrow of the login form.
    pub fn flip_form(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| effects::flip_form(bootstrapper.context()))
    }

    /// Registration link and its back arrow.
    pub fn flip_card(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| effects::flip_card(bootstrapper.context()))
    }

    /// Info link of the front card.
    pub fn flip_to_info(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| effects::flip_to_info(bootstrapper.context()))
    }

    /// Back arrow of the info card.
    pub fn flip_from_info(&self) -> Callback<MouseEvent> {
        self.callback(|bootstrapper| effects::flip_from_info(bootstrapper.context()))
    }
}
