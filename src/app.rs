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

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Narative");
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/studio_website.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="Narative is a digital-first design studio that is all about reducing the noise and unnecessary details. We help you solve your problems, grow your business and simply tell your story."
        />
        <Meta
            name="keywords"
            content="design studio, digital design, branding, product design, narative"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Narative"/>
        <Meta property="og:url" content="https://narative.co/"/>
        <Meta property="og:title" content="Narative - Digital-first design studio"/>
        <Meta property="og:description" content="Some things are worth the wait. Narative is a digital-first design studio; our new site is on its way."/>
        <Meta property="og:image" content="https://res.cloudinary.com/narative/video/upload/v1524716897/narative-wave.jpg"/>

        // Twitter
        <Meta property="twitter:card" content="summary_large_image"/>
        <Meta property="twitter:site" content="@narative_co"/>
        <Meta property="twitter:url" content="https://narative.co/"/>
        <Meta property="twitter:title" content="Narative - Digital-first design studio"/>
        <Meta property="twitter:description" content="Some things are worth the wait. Narative is a digital-first design studio; our new site is on its way."/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
    }
}
