// Shared helpers for the browser component tests.
//
//   1. Create a mount-point `<div>` and attach it to `<body>`.
//   2. Render the component under test into it with `leptos::mount_to`.
//   3. Yield with `gloo_timers::future::TimeoutFuture` so effects run.
//   4. Query the DOM and assert on the rendered output.
//   5. Remove the mount-point so tests don't leak into each other.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub fn create_mount_point() -> HtmlElement {
    let document = leptos::document();
    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();
    mount.unchecked_into()
}

pub fn cleanup(mount: &HtmlElement) {
    mount.remove();
}
