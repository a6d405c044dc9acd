use super::{GreetingPage, LandingActions, LoginPage, Preloader};
use crate::browser::connect;
use crate::models::LandingView;
use log::error;
use piggy_shared::config::FrontendConfig;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, Properties, function_component, html, use_effect_with, use_memo};
use yewdux::YewduxRoot;
use yewdux::prelude::use_store;

/// Properties of [`LandingApp`].
#[derive(Properties, PartialEq)]
pub struct LandingAppProps {
    /// Configuration the page was started with
    pub config: Rc<FrontendConfig>,
}

/// Root component: the yewdux store and the landing page inside it.
#[function_component(LandingApp)]
pub fn landing_app(props: &LandingAppProps) -> Html {
    html! {
        <YewduxRoot>
            <Landing config={Rc::clone(&props.config)} />
        </YewduxRoot>
    }
}

#[function_component(Landing)]
fn landing(props: &LandingAppProps) -> Html {
    let (view, dispatch) = use_store::<LandingView>();

    let bootstrapper = {
        let config = Rc::clone(&props.config);
        use_memo((), move |_| match connect(config, dispatch) {
            Ok(bootstrapper) => Some(bootstrapper),
            Err(err) => {
                error!("landing page could not start: {err}");
                None
            }
        })
    };

    {
        let bootstrapper = bootstrapper.clone();
        use_effect_with((), move |_| {
            if let Some(bootstrapper) = &*bootstrapper {
                spawn_local(Rc::clone(bootstrapper).start());
            }
            || ()
        });
    }

    let Some(bootstrapper) = &*bootstrapper else {
        return html! {
            <div id="startup-error">{"PiggyBank is unavailable right now. Please, reload the page."}</div>
        };
    };
    let actions = LandingActions::new(Rc::clone(bootstrapper));

    html! {
        <>
            <Preloader
                visible={view.preloader_visible}
                last_logo={view.last_logo_visible}
            />
            <LoginPage view={Rc::clone(&view)} actions={actions.clone()} />
            <GreetingPage view={view} actions={actions} />
        </>
    }
}
