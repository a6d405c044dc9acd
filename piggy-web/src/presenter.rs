//! The login surface and the piggy's attention-grabbing shakes.

use crate::context::AppContext;
use crate::models::{LandingView, LoginInput};
use std::rc::Rc;

/// Shows the login page, focuses the username and schedules two automatic
/// shakes: one after `initial_shake`, the next `shake_repeat` later.
pub fn show_login_form(ctx: &AppContext) {
    ctx.ui.update(Box::new(LandingView::show_login));
    ctx.ui.focus(LoginInput::Username);

    let timings = ctx.config.timings;
    let ui = Rc::clone(&ctx.ui);
    let scheduler = Rc::clone(&ctx.scheduler);
    ctx.scheduler.defer(
        timings.initial_shake(),
        Box::new(move || {
            ui.update(Box::new(LandingView::toggle_auto_shake));
            scheduler.defer(
                timings.shake_repeat(),
                Box::new(move || ui.update(Box::new(LandingView::toggle_auto_shake))),
            );
        }),
    );
}

/// Hover or click on the piggy. Starts a shake unless one is running or the
/// skip state is set; returns whether it did.
pub fn hover_shake(ctx: &AppContext) -> bool {
    let piggy = ctx.ui.view().piggy;
    if piggy.skip_shake || piggy.hover_shake {
        return false;
    }

    ctx.ui.update(Box::new(LandingView::toggle_hover_shake));
    let ui = Rc::clone(&ctx.ui);
    ctx.scheduler.defer(
        ctx.config.timings.hover_shake(),
        Box::new(move || ui.update(Box::new(LandingView::toggle_hover_shake))),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::LandingUi;
    use crate::test_support::{Harness, UiEvent};
    use std::time::Duration;

    #[test]
    fn test_login_form_is_shown_and_focused() {
        let harness = Harness::new();
        show_login_form(&harness.ctx);

        assert!(harness.view().login_page_visible);
        assert_eq!(
            harness.ui.events(),
            vec![UiEvent::Focus(LoginInput::Username)]
        );
    }

    #[test]
    fn test_exactly_two_shakes_at_700_and_2600() {
        let mut harness = Harness::new();
        show_login_form(&harness.ctx);

        harness.advance(699);
        assert!(!harness.view().piggy.auto_shake);

        harness.advance(1);
        assert!(harness.view().piggy.auto_shake);
        assert_eq!(harness.scheduler.now(), Duration::from_millis(700));

        harness.advance(1899);
        assert!(harness.view().piggy.auto_shake);

        harness.advance(1);
        assert!(!harness.view().piggy.auto_shake);
        assert_eq!(harness.scheduler.now(), Duration::from_millis(2600));

        assert_eq!(harness.scheduler.pending(), 0);
        assert_eq!(
            harness.scheduler.requested(),
            vec![Duration::from_millis(700), Duration::from_millis(1900)]
        );

        harness.advance(10_000);
        assert!(!harness.view().piggy.auto_shake);
        assert_eq!(harness.scheduler.requested().len(), 2);
    }

    #[test]
    fn test_hover_shake_toggles_back() {
        let mut harness = Harness::new();
        assert!(hover_shake(&harness.ctx));
        assert!(harness.view().piggy.hover_shake);

        harness.advance(1700);
        assert!(!harness.view().piggy.hover_shake);
    }

    #[test]
    fn test_hover_shake_ignored_while_running() {
        let mut harness = Harness::new();
        assert!(hover_shake(&harness.ctx));
        assert!(!hover_shake(&harness.ctx));
        assert!(!hover_shake(&harness.ctx));
        assert_eq!(harness.scheduler.requested().len(), 1);

        harness.advance(1700);
        assert!(hover_shake(&harness.ctx));
    }

    #[test]
    fn test_hover_shake_ignored_while_skipped() {
        let harness = Harness::new();
        harness
            .ui
            .update(Box::new(|view: &mut LandingView| view.piggy.skip_shake = true));

        assert!(!hover_shake(&harness.ctx));
        assert!(!harness.view().piggy.hover_shake);
        assert_eq!(harness.scheduler.pending(), 0);
    }

    #[test]
    fn test_hover_shake_independent_of_auto_shake() {
        let mut harness = Harness::new();
        show_login_form(&harness.ctx);
        harness.advance(700);

        assert!(hover_shake(&harness.ctx));
        let piggy = harness.view().piggy;
        assert!(piggy.auto_shake && piggy.hover_shake);
    }
}
