// Copyright 2026 Narative Studio Inc.
// Licensed under MIT OR Apache-2.0
//
// Tests for the contact forms. Submission is log-and-discard, so the
// contract to check is: the handler swallows the event (no navigation)
// and leaves the fields alone.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlFormElement, HtmlInputElement};

use studio_website::components::Forms::{ContactForm, PhoneForm};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// A plain `Event::new` is not cancelable, so `prevent_default` would be a
// no-op and the assertion below meaningless.
fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init).unwrap()
}

#[wasm_bindgen_test]
async fn phone_form_swallows_the_submission() {
    let mount = create_mount_point();
    mount_to(mount.clone(), || view! { <PhoneForm/> });
    TimeoutFuture::new(0).await;

    let input = mount
        .query_selector("input[name='phone']")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    input.set_value("+1 555 013 1336");

    let form = mount
        .query_selector("form.phone-form")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    let ev = submit_event();
    form.dispatch_event(&ev).unwrap();
    TimeoutFuture::new(0).await;

    assert!(
        ev.default_prevented(),
        "the handler must stop the browser's own submission"
    );
    assert_eq!(input.value(), "+1 555 013 1336", "fields are left alone");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn contact_form_has_the_three_fields() {
    let mount = create_mount_point();
    mount_to(mount.clone(), || view! { <ContactForm/> });
    TimeoutFuture::new(0).await;

    for selector in ["input[name='name']", "input[name='email']", "textarea[name='details']"] {
        assert!(
            mount.query_selector(selector).unwrap().is_some(),
            "missing {selector}"
        );
    }

    let form = mount
        .query_selector("form.contact-form")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    let ev = submit_event();
    form.dispatch_event(&ev).unwrap();
    TimeoutFuture::new(0).await;
    assert!(ev.default_prevented());

    cleanup(&mount);
}
