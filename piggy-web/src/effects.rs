//! Card and form transitions. Each call flips one flag; the delayed
//! companions let the CSS flip finish before content changes.

use crate::context::AppContext;
use crate::models::{LandingView, LoginInput};
use std::rc::Rc;

/// Turns the login cube and focuses the password input.
pub fn flip_form(ctx: &AppContext) {
    ctx.ui.update(Box::new(LandingView::toggle_login_form));
    ctx.ui.focus(LoginInput::Password);
}

/// Turns the front card; the avatar starts animating once the flip is done.
pub fn flip_card(ctx: &AppContext) {
    let ui = Rc::clone(&ctx.ui);
    ctx.scheduler.defer(
        ctx.config.timings.avatar_animation(),
        Box::new(move || ui.update(Box::new(LandingView::animate_avatar))),
    );
    ctx.ui.update(Box::new(LandingView::toggle_card));
}

/// Turns the card to its info side and shows the info panel at once.
pub fn flip_to_info(ctx: &AppContext) {
    ctx.ui.update(Box::new(LandingView::toggle_card_info));
    toggle_info(ctx);
}

/// Turns the card back from the info side; the panel follows after the flip.
pub fn flip_from_info(ctx: &AppContext) {
    ctx.ui.update(Box::new(LandingView::toggle_card_info));
    let ui = Rc::clone(&ctx.ui);
    ctx.scheduler.defer(
        ctx.config.timings.info_panel(),
        Box::new(move || ui.update(Box::new(LandingView::toggle_info))),
    );
}

/// Shows or hides the info panel.
pub fn toggle_info(ctx: &AppContext) {
    ctx.ui.update(Box::new(LandingView::toggle_info));
}
