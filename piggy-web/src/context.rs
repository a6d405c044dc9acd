//! Shared handles passed to every step of the landing flow.

use crate::platform::{AccountSource, IdentityProvider, LandingUi, RateSource, Scheduler};
use piggy_shared::config::FrontendConfig;
use piggy_shared::models::DisplayState;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle on the page's display settings.
pub type DisplayHandle = Rc<RefCell<DisplayState>>;

/// Everything the landing flow needs, constructed once at startup and cloned
/// into whichever step or callback needs it.
#[derive(Clone)]
pub struct AppContext {
    /// Endpoints and timings
    pub config: Rc<FrontendConfig>,
    /// Display settings written during startup
    pub display: DisplayHandle,
    /// Session owner
    pub identity: Rc<dyn IdentityProvider>,
    /// Backend account endpoints
    pub accounts: Rc<dyn AccountSource>,
    /// Exchange-rate service
    pub rates: Rc<dyn RateSource>,
    /// Rendered page
    pub ui: Rc<dyn LandingUi>,
    /// Tasks and timers
    pub scheduler: Rc<dyn Scheduler>,
}

impl AppContext {
    /// Copy of the display settings as they are right now.
    pub fn display_snapshot(&self) -> DisplayState {
        self.display.borrow().clone()
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}
