// Copyright 2026 Narative Studio Inc.
// Licensed under MIT OR Apache-2.0
//
// Tests for the autoplay bootstrap: whatever the markup says, the video
// must come out of mount muted, without native controls, and looping.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlVideoElement;

use studio_website::components::WaveVideo::WaveVideo;
use studio_website::state::Animation;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn video_is_muted_and_uncontrolled_after_mount() {
    let mount = create_mount_point();
    let (animation, _) = create_signal(Animation::Idle);
    mount_to(mount.clone(), move || view! { <WaveVideo animation/> });

    // let the mount effect run
    TimeoutFuture::new(0).await;

    let video = mount
        .query_selector("video")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlVideoElement>()
        .unwrap();

    assert!(video.muted(), "autoplay requires the element to be muted");
    assert!(!video.controls(), "native controls must be disabled");
    assert!(video.loop_(), "the wave video loops");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn video_offers_all_three_sources() {
    let mount = create_mount_point();
    let (animation, _) = create_signal(Animation::Idle);
    mount_to(mount.clone(), move || view! { <WaveVideo animation/> });
    TimeoutFuture::new(0).await;

    let sources = mount.query_selector_all("video source").unwrap();
    assert_eq!(sources.length(), 3, "webm, mp4 and ogv sources");

    cleanup(&mount);
}
