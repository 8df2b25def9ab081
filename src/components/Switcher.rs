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

use std::time::Duration;

use crate::components::Container::*;
use crate::components::Forms::*;
use crate::components::Logo::*;
use crate::components::WaveVideo::*;
use crate::icons::ArrowRight;
use crate::state::{Animation, View};
use crate::theme::Theme;
use leptos::*;

/// Delay before the entrance transitions kick in.
const ENTRANCE_DELAY: Duration = Duration::from_millis(300);

/// Owns the page state and slides between the home and contact panels.
///
/// Both panels stay mounted the whole time; the contact layer is parked one
/// viewport-width to the right and rides along when the sliding layer is
/// pushed out by `-100vw`.
#[component]
pub fn Switcher(theme: Theme) -> impl IntoView {
    let (view, set_view) = create_signal(View::default());
    let (animation, set_animation) = create_signal(Animation::default());

    // The entrance transitions start shortly after mount. The handle is kept
    // and cleared on cleanup so a quick unmount cannot fire a write into a
    // disposed scope.
    let entrance_timer = store_value(None::<leptos::leptos_dom::helpers::TimeoutHandle>);
    create_effect(move |_| {
        let scheduled = set_timeout_with_handle(
            move || set_animation.update(|a| *a = a.started()),
            ENTRANCE_DELAY,
        );
        match scheduled {
            Ok(handle) => entrance_timer.set_value(Some(handle)),
            Err(e) => log::warn!("could not schedule entrance timer: {e:?}"),
        }
    });
    on_cleanup(move || {
        if let Some(handle) = entrance_timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <div class="switch-layer" style:transform=move || view.get().transform()>
            <Container theme=theme.clone() background=Background::Dark>
                <HomePanel
                    animation
                    on_contact=move || set_view.set(View::Contact)
                />
            </Container>
            <div class="contact-layer">
                <div class="contact-sheen"></div>
                <Container theme=theme>
                    <ContactPanel
                        animation
                        on_back=move || set_view.set(View::Home)
                    />
                </Container>
            </div>
        </div>
    }
}

#[component]
fn HomePanel<F>(animation: ReadSignal<Animation>, on_contact: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="grid-frame">
            <div class="column-left">
                <div class="logo-frame fade-up" class:start=move || animation.get().is_started()>
                    <Logo/>
                </div>
                <div
                    class="copy-block fade-up delay-copy"
                    class:start=move || animation.get().is_started()
                >
                    <h1 class="welcome">"Some things are worth the wait."</h1>
                    <p class="lede">
                        "We’re Narative! Yes, that is with one R. Narative is a \
                         digital-first design studio that is all about reducing the \
                         noise and unnecessary details—using classical techniques with \
                         state of the art technologies, we help you solve your \
                         problems, grow your business and simply tell your story."
                    </p>
                    <p class="contact-cue" on:click=move |_| on_contact()>
                        "Our new site is on its way. "
                        <span class="arrow-cue">
                            <a class="contact-link">"Get in touch"</a>
                            "."
                            <ArrowRight/>
                        </span>
                    </p>
                </div>
                <div
                    class="copyright fade-up delay-copyright"
                    class:start=move || animation.get().is_started()
                >
                    "© 2026 Narative Studio Inc."
                </div>
            </div>
            <div class="column-right">
                <WaveVideo animation/>
                <div class="copyright-mobile">"© 2026 Narative Studio Inc."</div>
            </div>
        </div>
    }
}

#[component]
fn ContactPanel<F>(animation: ReadSignal<Animation>, on_back: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="grid-frame">
            <div class="column-left">
                <div class="logo-frame fade-up" class:start=move || animation.get().is_started()>
                    <Logo/>
                </div>
                <div
                    class="copy-block fade-up delay-copy"
                    class:start=move || animation.get().is_started()
                >
                    <h1 class="welcome">"How can we help?"</h1>
                    <p class="lede">
                        <span class="highlight">"Tell us a bit more"</span>
                        " about your project. The more detailed is the description, \
                         the more accurate our quote will be."
                    </p>
                    <p class="lede">
                        <span class="highlight">"In a rush?"</span>
                        " Leave us your phone number below and our business \
                         development team will contact you within 24 working hours."
                    </p>
                    <PhoneForm/>
                </div>
                <div
                    class="copyright fade-up delay-copyright"
                    class:start=move || animation.get().is_started()
                >
                    "© 2026 Narative Studio Inc."
                </div>
                <button class="back-link" on:click=move |_| on_back()>"Back"</button>
            </div>
            <div class="column-right">
                <ContactForm/>
            </div>
        </div>
    }
}
