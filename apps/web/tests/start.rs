#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().expect("browser window")
}

fn mount(id: &str) -> HtmlElement {
    let document = window().document().expect("document");
    let element = document.create_element("div").expect("div");
    element.set_id(id);
    document.body().expect("body").append_child(&element).expect("mounted");
    element.dyn_into::<HtmlElement>().expect("html element")
}

async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("timeout scheduled");
    });
    JsFuture::from(promise).await.expect("timer resolved");
}

#[wasm_bindgen_test]
async fn page_runs_the_transition_once() {
    let body = window().document().and_then(|d| d.body()).expect("body");
    body.set_attribute("data-splash-hold-ms", "10").expect("hold attribute");
    body.set_attribute("data-splash-fade-ms", "10").expect("fade attribute");

    let welcome = mount("welcomeSlide");
    let login = mount("loginPage");

    assert!(splash_web::start().is_ok());
    sleep_ms(100).await;

    assert!(welcome.class_list().contains("hide"));
    assert_eq!(welcome.style().get_property_value("display").expect("display"), "none");
    assert!(login.class_list().contains("show"));

    // Reset the page, then replay the load: nothing may be restyled again.
    welcome.class_list().remove_1("hide").expect("hide removed");
    welcome.style().remove_property("display").expect("display removed");
    login.class_list().remove_1("show").expect("show removed");

    let event = Event::new("DOMContentLoaded").expect("event");
    window().dispatch_event(&event).expect("dispatched");
    assert!(splash_web::start().is_ok());
    sleep_ms(100).await;

    assert!(!welcome.class_list().contains("hide"));
    assert_eq!(welcome.style().get_property_value("display").expect("display"), "");
    assert!(!login.class_list().contains("show"));
}
