//! Mobile client detection.

use crate::context::AppContext;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static MOBILE_AGENT: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .case_insensitive(true)
        .build()
        .expect("mobile user-agent pattern is a valid regex")
});

/// Whether `user_agent` names a phone or tablet browser.
pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_AGENT.is_match(user_agent)
}

/// Flags mobile clients and removes their tap delay.
///
/// Returns whether the client was detected as mobile. Repeated calls never
/// enable touch input twice.
pub fn detect(ctx: &AppContext) -> bool {
    if ctx.display.borrow().mobile_client {
        return true;
    }
    let Some(user_agent) = ctx.ui.user_agent() else {
        return false;
    };
    if !is_mobile_agent(&user_agent) {
        return false;
    }
    debug!("mobile client detected: {user_agent}");
    ctx.ui.enable_touch_input();
    ctx.display.borrow_mut().mark_mobile();
    true
}
