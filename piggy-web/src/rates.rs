//! RUB exchange rates for the balances on the greeting page.

use crate::context::AppContext;
use crate::models::LandingView;
use log::{debug, warn};

/// Loads the RUB conversion factors into the display settings and into the
/// view, whichever runs first of this and the greeting sequence.
///
/// A failed request, or a rate that cannot be inverted, leaves the
/// corresponding factor at `0.0`. Nothing is retried.
pub async fn fetch_rates(ctx: &AppContext) {
    let payload = match ctx.rates.latest_rates().await {
        Ok(payload) => payload,
        Err(err) => {
            warn!("exchange rates unavailable: {err}");
            return;
        }
    };

    let factors = payload.rates.conversion_factors();
    if factors.eur.is_none() || factors.usd.is_none() {
        warn!("ignoring unusable exchange rates: {:?}", payload.rates);
    }
    ctx.display.borrow_mut().apply_rates(factors);
    // The greeting may already hold its display snapshot.
    ctx.ui
        .update(Box::new(move |view: &mut LandingView| view.display.apply_rates(factors)));
    debug!("exchange rates loaded: {:?}", ctx.display.borrow());
}
