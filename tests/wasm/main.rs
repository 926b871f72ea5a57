#![cfg(target_arch = "wasm32")]

use eco_shop::client::ClientError;
use eco_shop::client::web::{attach_filter_buttons, energy_offer_from, item_ref_from};
use eco_shop::client::{EnergyOffer, ItemRef};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const SHOP_FIXTURE: &str = r#"
  <button class="buy-energy" data-energy="10" data-price="50">buy</button>
  <div class="card">
    <h3 class="card-title">  Backpack </h3>
    <button class="buy-item" data-item-id="12">buy</button>
  </div>
  <button class="buy-item orphan" data-item-id="13">buy</button>
  <nav>
    <button class="filter-btn active btn-success" data-filter="all">All</button>
    <button class="filter-btn btn-outline-success" data-filter="weapon">Weapons</button>
    <button class="filter-btn btn-outline-success" data-filter="hat">Hats</button>
  </nav>
  <div class="item-card" data-type="weapon"></div>
  <div class="item-card" data-type="hat"></div>
  <div class="item-card" data-type="weapon"></div>
"#;

fn mount(html: &str) -> Document {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document");
    document.body().expect("body").set_inner_html(html);
    document
}

fn element(document: &Document, selector: &str) -> HtmlElement {
    document
        .query_selector(selector)
        .expect("valid selector")
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("html element")
}

fn all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = document.query_selector_all(selector).expect("valid selector");
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn displays(document: &Document) -> Vec<String> {
    all(document, ".item-card")
        .iter()
        .map(|card| card.style().get_property_value("display").expect("display"))
        .collect()
}

fn active_filters(document: &Document) -> Vec<String> {
    all(document, ".filter-btn")
        .iter()
        .filter(|button| button.class_list().contains("active"))
        .filter_map(|button| button.dataset().get("filter"))
        .collect()
}

#[wasm_bindgen_test]
fn energy_control_attributes_are_read() {
    let document = mount(SHOP_FIXTURE);

    let offer = energy_offer_from(&element(&document, ".buy-energy")).unwrap();

    assert_eq!(offer, EnergyOffer { energy: 10, price: 50 });
}

#[wasm_bindgen_test]
fn item_control_reads_id_and_card_title() {
    let document = mount(SHOP_FIXTURE);

    let item = item_ref_from(&element(&document, ".card .buy-item")).unwrap();

    assert_eq!(
        item,
        ItemRef {
            id: "12".to_string(),
            name: "Backpack".to_string(),
        }
    );
}

#[wasm_bindgen_test]
fn item_control_outside_a_card_has_no_title() {
    let document = mount(SHOP_FIXTURE);

    let err = item_ref_from(&element(&document, ".orphan")).unwrap_err();

    assert_eq!(err, ClientError::MissingAttribute("card-title"));
}

#[wasm_bindgen_test]
fn filter_click_restyles_buttons_and_hides_cards() {
    let document = mount(SHOP_FIXTURE);
    attach_filter_buttons(&document);

    let weapon = element(&document, r#".filter-btn[data-filter="weapon"]"#);
    weapon.click();

    assert_eq!(active_filters(&document), vec!["weapon".to_string()]);
    let classes = weapon.class_list();
    assert!(classes.contains("btn-success"));
    assert!(!classes.contains("btn-outline-success"));
    let all_button = element(&document, r#".filter-btn[data-filter="all"]"#);
    assert!(all_button.class_list().contains("btn-outline-success"));
    assert!(!all_button.class_list().contains("btn-success"));
    assert_eq!(displays(&document), vec!["block", "none", "block"]);

    all_button.click();

    assert_eq!(active_filters(&document), vec!["all".to_string()]);
    assert_eq!(displays(&document), vec!["block", "block", "block"]);
}
