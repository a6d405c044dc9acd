use super::LandingActions;
use crate::models::LandingView;
use piggy_shared::models::{Account, Currency, DisplayState};
use std::rc::Rc;
use yew::{Html, Properties, function_component, html};

/// Properties of [`GreetingPage`].
#[derive(Properties, PartialEq)]
pub struct GreetingPageProps {
    /// Current flags and the loaded account
    pub view: Rc<LandingView>,
    /// Control callbacks
    pub actions: LandingActions,
}

fn savings_line(display: &DisplayState, rubles: f64) -> String {
    let mut line = format!("{rubles:.2} RUB");
    for (currency, label) in [(Currency::Eur, "EUR"), (Currency::Usd, "USD")] {
        if let Some(amount) = display.from_rubles(rubles, currency) {
            line.push_str(&format!(" / {amount:.2} {label}"));
        }
    }
    line
}

/// Greeting shown once an account is loaded or registration is skipped.
#[function_component(GreetingPage)]
pub fn greeting_page(props: &GreetingPageProps) -> Html {
    let view = &props.view;
    let account = view.account.as_ref();

    // A skipped registration reaches the greeting before any account exists.
    let name = account.and_then(Account::name).unwrap_or("friend");
    let savings = account
        .and_then(|account| account.payload().pointer("/saving/amount"))
        .and_then(serde_json::Value::as_f64)
        .map(|rubles| savings_line(&view.display, rubles));
    let style = (!view.greeting_visible).then_some("display: none");

    html! {
        <div id="greetingpage" style={style}>
            <div id="userpic"></div>
            <h1 id="greeting">{format!("Hi, {name}!")}</h1>
            if let Some(savings) = savings {
                <p id="savings">{savings}</p>
            }
            if !view.display.save_permit {
                <p class="demonotice">{"Demo mode: changes will not be saved"}</p>
            }
            <button class="logoutbutton" onclick={props.actions.logout()}>{"Log out"}</button>
        </div>
    }
}
