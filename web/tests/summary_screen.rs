#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use breaklock_core::{ActionId, SummaryConfig};
use breaklock_web::{Outcome, SummaryScreen, SummaryScreenProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

type Clicks = Rc<RefCell<Vec<ActionId>>>;

/// Lets the yew scheduler run pending renders and messages.
async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

fn mount_point() -> Element {
    let host = gloo::utils::document()
        .create_element("div")
        .expect("create host");
    gloo::utils::body()
        .append_child(&host)
        .expect("mount host");
    host
}

fn props(outcome: Option<Outcome>, clicks: &Clicks) -> SummaryScreenProps {
    let clicks = clicks.clone();
    SummaryScreenProps {
        config: SummaryConfig::default(),
        lang: "en".into(),
        outcome,
        on_action: Callback::from(move |id| clicks.borrow_mut().push(id)),
    }
}

fn query(host: &Element, selector: &str) -> Element {
    host.query_selector(selector)
        .expect("selector must be valid")
        .expect("element must exist")
}

fn click(host: &Element, selector: &str) {
    query(host, selector).unchecked_ref::<HtmlElement>().click();
}

fn is_shown(host: &Element) -> bool {
    query(host, ".summary").class_list().contains("active")
}

#[wasm_bindgen_test]
async fn action_hides_and_forwards_then_next_round_shows_again() {
    let clicks: Clicks = Default::default();
    let host = mount_point();
    let mut app = yew::Renderer::<SummaryScreen>::with_root_and_props(
        host.clone(),
        props(Some(Outcome::new(1, false, 3)), &clicks),
    )
    .render();
    settle().await;
    assert!(is_shown(&host));

    click(&host, ".summary-action-button");
    settle().await;
    assert!(!is_shown(&host));
    assert_eq!(*clicks.borrow(), [SummaryConfig::NEW_GAME]);

    app.update(props(Some(Outcome::new(2, false, 3)), &clicks));
    settle().await;
    assert!(is_shown(&host));
    assert!(query(&host, ".summary-title").class_list().contains("fail"));

    click(&host, ".summary-action-button");
    settle().await;
    assert!(!is_shown(&host));

    app.update(props(Some(Outcome::new(3, true, 1)), &clicks));
    settle().await;
    assert!(is_shown(&host));
    assert!(query(&host, ".summary-title").class_list().contains("success"));
    assert_eq!(clicks.borrow().len(), 2);
}

#[wasm_bindgen_test]
async fn stays_hidden_until_a_round_ends() {
    let clicks: Clicks = Default::default();
    let host = mount_point();
    let mut app =
        yew::Renderer::<SummaryScreen>::with_root_and_props(host.clone(), props(None, &clicks))
            .render();
    settle().await;
    assert!(!is_shown(&host));

    app.update(props(Some(Outcome::new(1, true, 2)), &clicks));
    settle().await;
    assert!(is_shown(&host));
}

#[wasm_bindgen_test]
async fn menu_control_flips_visibility() {
    let clicks: Clicks = Default::default();
    let host = mount_point();
    let _app = yew::Renderer::<SummaryScreen>::with_root_and_props(
        host.clone(),
        props(Some(Outcome::new(1, true, 1)), &clicks),
    )
    .render();
    settle().await;

    click(&host, ".breaklock > small");
    settle().await;
    assert!(!is_shown(&host));

    click(&host, ".breaklock > small");
    settle().await;
    assert!(is_shown(&host));
    assert!(clicks.borrow().is_empty());
}
