//! Account loading and the reveal of the greeting page.

use crate::context::AppContext;
use crate::models::LandingView;
use crate::session::logout;
use log::{info, warn};
use piggy_shared::models::{Account, ApiError, Session};

/// Alert shown when the authenticated user has no account.
pub fn account_failure_message(username: &str) -> String {
    format!("Failed to get the account for user '{username}'. Please, make sure the account exists")
}

/// Fetches the current account with the session's bearer token and reveals
/// the greeting page.
///
/// On any failure the user is alerted and logged out.
///
/// # Errors
/// Returns the [`ApiError`] that ended the load, after the alert and logout.
pub async fn load_current_account(ctx: &AppContext, session: &Session) -> Result<(), ApiError> {
    match ctx.accounts.current_account(&session.token).await {
        Ok(account) => {
            info!("account loaded for '{}'", session.username);
            show_greeting_page(ctx, account).await;
            Ok(())
        }
        Err(err) => {
            warn!("account fetch for '{}' failed: {err}", session.username);
            ctx.ui.alert(&account_failure_message(&session.username));
            logout(ctx);
            Err(err)
        }
    }
}

/// Initializes `account` into the page, waits for the avatar and reveals the
/// greeting page after the configured delay.
pub async fn show_greeting_page(ctx: &AppContext, account: Account) {
    let display = ctx.display_snapshot();
    ctx.ui
        .update(Box::new(move |view: &mut LandingView| {
            view.init_account(account, display);
        }));

    if let Err(err) = ctx.ui.preload_image(&ctx.config.avatar_url).await {
        warn!("avatar preload failed, revealing greeting anyway: {err}");
    }

    ctx.scheduler
        .sleep(ctx.config.timings.greeting_reveal())
        .await;
    ctx.ui.update(Box::new(LandingView::reveal_greeting));
}
