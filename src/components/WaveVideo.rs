/*
 * Copyright 2026 Narative Studio Inc.
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::state::Animation;
use leptos::html::Video;
use leptos::*;

const POSTER: &str =
    "https://res.cloudinary.com/narative/video/upload/v1524716897/narative-wave.jpg";
const SRC_WEBM: &str =
    "https://res.cloudinary.com/narative/video/upload/v1524716897/narative-wave.webm";
const SRC_MP4: &str =
    "https://res.cloudinary.com/narative/video/upload/v1524716897/narative-wave.mp4";
const SRC_OGV: &str =
    "https://res.cloudinary.com/narative/video/upload/v1524716897/narative-wave.ogv";

/// The looping wave video behind the home panel.
///
/// Some browsers refuse to autoplay a video that is not muted at the moment
/// `play()` is called, whatever the markup attributes say. The element is
/// captured once through the node ref and configured imperatively right
/// after mount: mute, drop native controls, loop, then play.
#[component]
pub fn WaveVideo(#[prop(into)] animation: Signal<Animation>) -> impl IntoView {
    let video_ref = create_node_ref::<Video>();

    create_effect(move |_| {
        if let Some(video) = video_ref.get() {
            video.set_muted(true);
            video.set_controls(false);
            video.set_loop(true);
            if let Err(e) = video.play() {
                log::warn!("wave video autoplay was rejected: {e:?}");
            }
        }
    });

    view! {
        <div class="wave-frame">
            <video
                class="wave-video blur-in"
                class:start=move || animation.get().is_started()
                node_ref=video_ref
                poster=POSTER
                playsinline=true
            >
                <source src=SRC_WEBM type="video/webm"/>
                <source src=SRC_MP4 type="video/mp4"/>
                <source src=SRC_OGV type="video/ogg"/>
            </video>
        </div>
    }
}
