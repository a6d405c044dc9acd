use super::LandingActions;
use crate::models::{LandingView, LoginInput};
use std::rc::Rc;
use yew::{Html, Properties, classes, function_component, html};

/// Properties of [`LoginPage`].
#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    /// Current flags
    pub view: Rc<LandingView>,
    /// Control callbacks
    pub actions: LandingActions,
}

/// Login cube, cards and the piggy.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let view = &props.view;
    let actions = &props.actions;
    let piggy = view.piggy;

    let piggy_classes = classes!(
        piggy.loading_spin.then_some("loadingspin"),
        piggy.auto_shake.then_some("auto-shake"),
        piggy.hover_shake.then_some("hover-shake"),
        piggy.skip_shake.then_some("skakelogo"),
    );
    let cube_classes = classes!(view.login_form_flipped.then_some("flippedform"));
    let flipper_classes = classes!(
        view.card_flipped.then_some("flippedcard"),
        view.card_flipped_to_info.then_some("flippedcardinfo"),
    );
    let avatar_classes = classes!(view.avatar_animated.then_some("avataranimation"));
    let page_style = (!view.login_page_visible).then_some("display: none");
    let info_style = (!view.info_visible).then_some("display: none");

    html! {
        <div id="loginpage" style={page_style}>
            <div
                id="piggy"
                class={piggy_classes}
                onclick={actions.hover_shake()}
                onmouseover={actions.hover_shake()}
            ></div>
            <div id="flipper" class={flipper_classes}>
                <div class="front">
                    <div id="cube" class={cube_classes}>
                        <input
                            id={LoginInput::Username.element_id()}
                            class="frontforms"
                            type="text"
                            placeholder="username"
                        />
                        <input
                            id={LoginInput::Password.element_id()}
                            class="frontforms"
                            type="password"
                            placeholder="password"
                        />
                    </div>
                    <button class="flipform" onclick={actions.flip_form()}>{"Next"}</button>
                    <button class="loginbutton" onclick={actions.login()}>{"Log in"}</button>
                    <button class="demobutton" onclick={actions.demo()}>{"Demo"}</button>
                    <span class="fliptext" onclick={actions.flip_card()}>{"Create account"}</span>
                    <span class="flipinfo" onclick={actions.flip_to_info()}>{"?"}</span>
                </div>
                <div class="back">
                    <div id="plusavatar" class={avatar_classes}></div>
                    <span id="skipmail" onclick={actions.skip_mail()}>{"Skip"}</span>
                </div>
                <div class="info">
                    <span class="frominfo" onclick={actions.flip_from_info()}>{"Back"}</span>
                </div>
            </div>
            <div id="infopage" style={info_style}>
                <h1 id="infotitle" onclick={actions.flip_from_info()}>{"PiggyBank"}</h1>
                <h2 id="infosubtitle" onclick={actions.flip_from_info()}>
                    {"Personal finances, simply counted"}
                </h2>
            </div>
        </div>
    }
}
