//! # Session Bootstrap
//!
//! Owns the authentication lifecycle of the landing page. On load it asks the
//! identity provider for an existing session (`check-sso`) and continues with
//! either the account load or the login form. The login, logout, demo and
//! skip-mail actions bound to the page controls live here too.

use crate::context::AppContext;
use crate::models::{LandingView, LoginInput};
use crate::platform::OnLoad;
use crate::{effects, greeting, mobile, presenter, rates};
use log::{debug, error, info, warn};
use piggy_shared::models::SessionError;
use std::cell::Cell;
use std::rc::Rc;

/// Alert shown when the identity provider reports an authentication error.
pub const AUTH_ERROR_MESSAGE: &str = "Something went wrong. Please, log in again";

/// Alert shown when the demo account cannot be fetched.
pub const DEMO_ERROR_MESSAGE: &str = "Something went wrong. Please, try again";

/// Where the landing page is in the authentication lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The login surface is, or will be, shown
    LoggedOut,
    /// An account is being fetched
    Authenticating,
    /// The greeting page owns the screen
    Greeting,
}

/// Drives the landing page from load to either the login form or the
/// greeting page.
#[derive(Debug)]
pub struct SessionBootstrapper {
    ctx: AppContext,
    phase: Cell<Phase>,
}

impl SessionBootstrapper {
    /// Wraps `ctx` in a bootstrapper that starts logged out.
    pub fn new(ctx: AppContext) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            phase: Cell::new(Phase::LoggedOut),
        })
    }

    /// Context shared with the page controls.
    pub const fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Page-load entry point.
    ///
    /// Mobile detection runs first, the rate fetch is spawned independently,
    /// then the session is resolved.
    pub async fn start(self: Rc<Self>) {
        mobile::detect(&self.ctx);

        let rates_ctx = self.ctx.clone();
        self.ctx
            .scheduler
            .spawn(Box::pin(async move { rates::fetch_rates(&rates_ctx).await }));

        self.register_reactions();
        self.bootstrap().await;
    }

    /// Wires the identity provider's success and error slots to this page.
    pub fn register_reactions(self: &Rc<Self>) {
        let on_success = Rc::downgrade(self);
        self.ctx.identity.set_on_auth_success(Box::new(move || {
            if let Some(this) = on_success.upgrade() {
                let scheduler = Rc::clone(&this.ctx.scheduler);
                scheduler.spawn(Box::pin(async move { this.on_auth_success().await }));
            }
        }));

        let on_error = Rc::downgrade(self);
        self.ctx.identity.set_on_auth_error(Box::new(move || {
            if let Some(this) = on_error.upgrade() {
                this.on_auth_error();
            }
        }));
    }

    /// Resolves the existing session, if any. An init failure reloads the
    /// page; there is nothing else to fall back to.
    pub async fn bootstrap(&self) {
        match self.ctx.identity.init(OnLoad::CheckSso).await {
            Ok(true) if self.ctx.identity.session().is_none() => {
                warn!("{}; showing login form", SessionError::MissingSession);
                presenter::show_login_form(&self.ctx);
            }
            Ok(true) => {
                debug!("existing session found");
                self.on_auth_success().await;
            }
            Ok(false) => {
                debug!("no session, showing login form");
                self.phase.set(Phase::LoggedOut);
                presenter::show_login_form(&self.ctx);
            }
            Err(err) => {
                error!("{err}; reloading");
                self.ctx.ui.reload();
            }
        }
    }

    /// Loads the account of the authenticated user.
    ///
    /// Ignored while another account load is running or the greeting page
    /// is already shown, so a session reported both by `init` and by the
    /// success slot is only fetched once.
    pub async fn on_auth_success(&self) {
        if self.phase.get() != Phase::LoggedOut {
            debug!("auth success ignored in phase {:?}", self.phase.get());
            return;
        }
        let Some(session) = self.ctx.identity.session() else {
            warn!("auth success ignored: {}", SessionError::MissingSession);
            return;
        };

        self.phase.set(Phase::Authenticating);
        let next = match greeting::load_current_account(&self.ctx, &session).await {
            Ok(()) => Phase::Greeting,
            Err(_) => Phase::LoggedOut,
        };
        self.phase.set(next);
    }

    /// Resets the login form after a failed authentication.
    pub fn on_auth_error(&self) {
        warn!("identity provider reported an authentication error");
        self.phase.set(Phase::LoggedOut);

        let ui = &self.ctx.ui;
        ui.update(Box::new(LandingView::hide_preloader));
        effects::flip_form(&self.ctx);
        ui.clear_login_fields();
        ui.focus(LoginInput::Username);
        ui.alert(AUTH_ERROR_MESSAGE);
    }

    /// Login button.
    pub fn login(&self) {
        self.ctx.ui.update(Box::new(LandingView::start_loading));
        if let Err(err) = self.ctx.identity.login() {
            warn!("{err}");
        }
    }

    /// Logout button.
    pub fn logout(&self) {
        logout(&self.ctx);
    }

    /// Demo button. Loads the shared demo account without touching the
    /// identity provider; demo data is never saved.
    pub async fn demo(&self) {
        if self.phase.get() != Phase::LoggedOut {
            debug!("demo ignored in phase {:?}", self.phase.get());
            return;
        }

        self.phase.set(Phase::Authenticating);
        match self.ctx.accounts.demo_account().await {
            Ok(account) => {
                info!("demo account loaded");
                self.ctx.display.borrow_mut().forbid_saving();
                greeting::show_greeting_page(&self.ctx, account).await;
                self.phase.set(Phase::Greeting);
            }
            Err(err) => {
                warn!("demo account fetch failed: {err}");
                self.ctx.ui.alert(DEMO_ERROR_MESSAGE);
                self.phase.set(Phase::LoggedOut);
            }
        }
    }

    /// Skip-mail link of the registration card.
    ///
    /// Commits the page to the greeting surface at once, so a session
    /// reported while the reveal is pending does not start an account load.
    pub fn skip_mail(&self) {
        if self.phase.get() != Phase::LoggedOut {
            debug!("skip-mail ignored in phase {:?}", self.phase.get());
            return;
        }
        self.phase.set(Phase::Greeting);

        self.ctx.ui.update(Box::new(LandingView::show_last_logo));
        let ui = Rc::clone(&self.ctx.ui);
        self.ctx.scheduler.defer(
            self.ctx.config.timings.skip_mail(),
            Box::new(move || ui.update(Box::new(LandingView::reveal_greeting))),
        );
    }
}

/// Ends the session through the identity provider, or reloads the page when
/// there is no session to end.
pub fn logout(ctx: &AppContext) {
    if !ctx.identity.is_authenticated() {
        ctx.ui.reload();
        return;
    }
    if let Err(err) = ctx.identity.logout() {
        warn!("{err}; reloading instead");
        ctx.ui.reload();
    }
}
