//! Browser binding: wires the handlers to the DOM at module start.

use crate::client::{
    ClientError, EnergyOffer, FilterControl, ItemCard, ItemRef, ShopEnv, buy_energy, buy_item,
    filter::{ACTIVE_CLASSES, INACTIVE_CLASS},
    select_filter,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, Headers, HtmlElement, Request, RequestInit, Response, Window};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    attach_energy_buttons(&document);
    attach_item_buttons(&document);
    attach_filter_buttons(&document);
}

/// [`ShopEnv`] backed by the global `window`.
pub struct BrowserEnv {
    window: Window,
}

impl BrowserEnv {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ShopEnv for BrowserEnv {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            console_error(&format!("alert failed: {}", js_error_message(&err)));
        }
    }

    fn reload(&self) {
        if let Err(err) = self.window.location().reload() {
            console_error(&format!("reload failed: {}", js_error_message(&err)));
        }
    }

    #[allow(clippy::future_not_send)] // JsFuture is not Send.
    async fn post(&self, path: &str, body: Option<String>) -> Result<String, ClientError> {
        let init = RequestInit::new();
        init.set_method("POST");
        let headers = Headers::new().map_err(transport)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport)?;
        init.set_headers(&headers);
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(path, &init).map_err(transport)?;
        let value = JsFuture::from(self.window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;
        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;

        text.as_string()
            .ok_or_else(|| ClientError::Decode("response body is not text".into()))
    }
}

/// A filter button or item card element.
struct DomElement(HtmlElement);

impl FilterControl for DomElement {
    fn filter_key(&self) -> Option<String> {
        self.0.dataset().get("filter")
    }

    fn set_active(&self, active: bool) {
        let classes = self.0.class_list();
        let _ = if active {
            classes
                .add_2(ACTIVE_CLASSES[0], ACTIVE_CLASSES[1])
                .and_then(|()| classes.remove_1(INACTIVE_CLASS))
        } else {
            classes
                .remove_2(ACTIVE_CLASSES[0], ACTIVE_CLASSES[1])
                .and_then(|()| classes.add_1(INACTIVE_CLASS))
        };
    }
}

impl ItemCard for DomElement {
    fn category(&self) -> Option<String> {
        self.0.dataset().get("type")
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.0.style().set_property("display", display);
    }
}

/// Reads `data-energy` / `data-price` off a buy-energy control.
pub fn energy_offer_from(control: &HtmlElement) -> Result<EnergyOffer, ClientError> {
    let dataset = control.dataset();
    EnergyOffer::from_attributes(dataset.get("energy").as_deref(), dataset.get("price").as_deref())
}

/// Reads `data-item-id` and the enclosing card's `.card-title` text.
pub fn item_ref_from(control: &HtmlElement) -> Result<ItemRef, ClientError> {
    let title = control
        .closest(".card")
        .ok()
        .flatten()
        .and_then(|card| card.query_selector(".card-title").ok().flatten())
        .and_then(|title| title.text_content());
    ItemRef::from_attributes(control.dataset().get("itemId").as_deref(), title.as_deref())
}

pub fn attach_energy_buttons(document: &Document) {
    for button in html_elements(document, ".buy-energy") {
        let target = button.clone();
        on_click(&button, move |_| {
            let offer = match energy_offer_from(&target) {
                Ok(offer) => offer,
                Err(err) => {
                    console_error(&format!("ignoring buy-energy click: {err}"));
                    return;
                }
            };
            let Some(env) = BrowserEnv::current() else {
                return;
            };
            spawn_local(async move {
                buy_energy(&env, offer).await;
            });
        });
    }
}

pub fn attach_item_buttons(document: &Document) {
    for button in html_elements(document, ".buy-item") {
        let target = button.clone();
        on_click(&button, move |_| {
            let item = match item_ref_from(&target) {
                Ok(item) => item,
                Err(err) => {
                    console_error(&format!("ignoring buy-item click: {err}"));
                    return;
                }
            };
            let Some(env) = BrowserEnv::current() else {
                return;
            };
            spawn_local(async move {
                buy_item(&env, &item).await;
            });
        });
    }
}

pub fn attach_filter_buttons(document: &Document) {
    for button in html_elements(document, ".filter-btn") {
        let clicked = DomElement(button.clone());
        let document = document.clone();
        on_click(&button, move |_| {
            let controls = dom_elements(&document, ".filter-btn");
            let cards = dom_elements(&document, ".item-card");
            select_filter(&controls, &clicked, &cards);
        });
    }
}

fn on_click(element: &HtmlElement, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        console_error(&format!("failed to attach click handler: {}", js_error_message(&err)));
    }
    // Listeners live as long as the page.
    closure.forget();
}

fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn dom_elements(document: &Document, selector: &str) -> Vec<DomElement> {
    html_elements(document, selector)
        .into_iter()
        .map(DomElement)
        .collect()
}

fn transport(err: JsValue) -> ClientError {
    ClientError::Transport(js_error_message(&err))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

fn console_error(message: &str) {
    tracing::warn!("{message}");
    web_sys::console::error_1(&JsValue::from(message));
}
