use crate::components::Switcher::*;
use crate::theme::Theme;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    // The theme is built here and handed down explicitly; no component
    // resolves tokens out of thin air.
    let theme = Theme::default();

    view! {
        <Title text="Home"/>
        <Switcher theme/>
    }
}
