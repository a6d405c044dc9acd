use yew::{Html, Properties, function_component, html};

/// Properties of [`Preloader`].
#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    /// Overlay shown
    pub visible: bool,
    /// Final frame shown
    pub last_logo: bool,
}

/// Overlay covering the page during a login.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let hidden = |visible: bool| (!visible).then_some("display: none");

    html! {
        <>
            <div id="preloader" style={hidden(props.visible)}>
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
            </div>
            <div id="lastlogo" style={hidden(props.last_logo)}></div>
        </>
    }
}
