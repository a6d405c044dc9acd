//! Flags the landing components render from.

use piggy_shared::models::{Account, DisplayState};

/// Which login input receives focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginInput {
    /// Front login field
    Username,
    /// Password field on the back of the login cube
    Password,
}

impl LoginInput {
    /// DOM id of the input.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Username => "frontloginform",
            Self::Password => "frontpasswordform",
        }
    }
}

/// Animation classes of the piggy logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PiggyState {
    /// Spinning while a login is in progress
    pub loading_spin: bool,
    /// Scheduled shake after the login form appears
    pub auto_shake: bool,
    /// Shake triggered by hovering the piggy
    pub hover_shake: bool,
    /// Set while the login spin runs; hover shakes are ignored meanwhile
    pub skip_shake: bool,
}

/// Visibility and animation flags of every landing surface.
///
/// Each flag maps to one class or display toggle of the rendered page. The
/// login page and the greeting page are never visible together.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(yewdux::Store))]
pub struct LandingView {
    /// Login page shown
    pub login_page_visible: bool,
    /// Preloader overlay shown
    pub preloader_visible: bool,
    /// Final preloader frame shown
    pub last_logo_visible: bool,
    /// Piggy logo animations
    pub piggy: PiggyState,
    /// Login cube turned to the password side
    pub login_form_flipped: bool,
    /// Front card turned to the registration side
    pub card_flipped: bool,
    /// Front card turned to the info side
    pub card_flipped_to_info: bool,
    /// Info panel shown
    pub info_visible: bool,
    /// Avatar animation started
    pub avatar_animated: bool,
    /// Greeting page shown
    pub greeting_visible: bool,
    /// Account rendered by the greeting page
    pub account: Option<Account>,
    /// Display settings the greeting page renders with
    pub display: DisplayState,
}

impl LandingView {
    /// Shows the login page in place of the greeting.
    pub fn show_login(&mut self) {
        self.greeting_visible = false;
        self.login_page_visible = true;
    }

    /// Login in progress: the piggy spins, hover shakes pause while it does,
    /// and the preloader covers the page.
    pub fn start_loading(&mut self) {
        self.piggy.loading_spin = !self.piggy.loading_spin;
        self.piggy.skip_shake = self.piggy.loading_spin;
        self.preloader_visible = true;
        self.last_logo_visible = true;
    }

    /// Removes the preloader overlay.
    pub fn hide_preloader(&mut self) {
        self.preloader_visible = false;
    }

    /// Shows the final preloader frame.
    pub fn show_last_logo(&mut self) {
        self.last_logo_visible = true;
    }

    /// Hands the account and the display settings to the greeting view.
    pub fn init_account(&mut self, account: Account, display: DisplayState) {
        self.account = Some(account);
        self.display = display;
    }

    /// Replaces every other surface with the greeting page.
    pub fn reveal_greeting(&mut self) {
        self.login_page_visible = false;
        self.preloader_visible = false;
        self.last_logo_visible = false;
        self.greeting_visible = true;
    }

    /// Flips the automatic shake class.
    pub fn toggle_auto_shake(&mut self) {
        self.piggy.auto_shake = !self.piggy.auto_shake;
    }

    /// Flips the hover shake class.
    pub fn toggle_hover_shake(&mut self) {
        self.piggy.hover_shake = !self.piggy.hover_shake;
    }

    /// Turns the login cube.
    pub fn toggle_login_form(&mut self) {
        self.login_form_flipped = !self.login_form_flipped;
    }

    /// Turns the front card to or from registration.
    pub fn toggle_card(&mut self) {
        self.card_flipped = !self.card_flipped;
    }

    /// Turns the front card to or from info.
    pub fn toggle_card_info(&mut self) {
        self.card_flipped_to_info = !self.card_flipped_to_info;
    }

    /// Shows or hides the info panel.
    pub fn toggle_info(&mut self) {
        self.info_visible = !self.info_visible;
    }

    /// Starts the avatar animation.
    pub fn animate_avatar(&mut self) {
        self.avatar_animated = true;
    }
}
