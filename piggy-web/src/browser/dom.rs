use crate::models::{LandingView, LoginInput};
use crate::platform::{LandingUi, ViewChange};
use async_trait::async_trait;
use futures::channel::oneshot;
use log::warn;
use piggy_shared::models::UiError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlImageElement, HtmlInputElement, Window};
use yewdux::Dispatch;

/// Class shared by the username and password inputs.
const LOGIN_FIELDS_SELECTOR: &str = ".frontforms";

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// The landing page as rendered by yew. Flags live in the yewdux store; the
/// few imperative operations go straight to the DOM.
pub struct BrowserUi {
    window: Window,
    view: Dispatch<LandingView>,
}

impl fmt::Debug for BrowserUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserUi").finish_non_exhaustive()
    }
}

impl BrowserUi {
    /// Wraps the window and the view store.
    pub fn new(window: Window, view: Dispatch<LandingView>) -> Self {
        Self { window, view }
    }

    fn element<T: JsCast>(&self, id: &str) -> Result<T, UiError> {
        self.window
            .document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<T>().ok())
            .ok_or_else(|| UiError::missing_element(id))
    }
}

#[async_trait(?Send)]
impl LandingUi for BrowserUi {
    fn view(&self) -> LandingView {
        (*self.view.get()).clone()
    }

    fn update(&self, change: ViewChange) {
        self.view.reduce_mut(move |view| change(view));
    }

    fn focus(&self, input: LoginInput) {
        let focused = self
            .element::<HtmlElement>(input.element_id())
            .and_then(|element| {
                element
                    .focus()
                    .map_err(|_| UiError::missing_element(input.element_id()))
            });
        if let Err(err) = focused {
            warn!("{err}");
        }
    }

    fn clear_login_fields(&self) {
        let Some(fields) = self
            .window
            .document()
            .and_then(|document| document.query_selector_all(LOGIN_FIELDS_SELECTOR).ok())
        else {
            return;
        };
        for index in 0..fields.length() {
            if let Some(input) = fields
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            {
                input.set_value("");
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!("alert failed: {}", js_message(&err));
        }
    }

    fn reload(&self) {
        if let Err(err) = self.window.location().reload() {
            warn!("reload failed: {}", js_message(&err));
        }
    }

    fn user_agent(&self) -> Option<String> {
        self.window.navigator().user_agent().ok()
    }

    fn enable_touch_input(&self) {
        let Some(body) = self.window.document().and_then(|document| document.body()) else {
            return;
        };
        if let Err(err) = body.style().set_property("touch-action", "manipulation") {
            warn!("touch input setup failed: {}", js_message(&err));
        }
    }

    async fn preload_image(&self, src: &str) -> Result<(), UiError> {
        let image = HtmlImageElement::new().map_err(|_| UiError::image_load(src))?;
        let (tx, rx) = oneshot::channel::<bool>();
        let sender = Rc::new(RefCell::new(Some(tx)));

        let on_load = {
            let sender = Rc::clone(&sender);
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = sender.borrow_mut().take() {
                    let _ = tx.send(true);
                }
            })
        };
        let on_error = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(false);
            }
        });

        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(src);

        let loaded = rx.await.unwrap_or(false);
        image.set_onload(None);
        image.set_onerror(None);
        if loaded {
            Ok(())
        } else {
            Err(UiError::image_load(src))
        }
    }
}
