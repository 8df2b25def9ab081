use crate::theme::Theme;
use leptos::*;

/// Backdrop variant for [`Container`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Background {
    Dark,
    #[default]
    Light,
}

impl Background {
    pub fn class(self) -> &'static str {
        match self {
            Background::Dark => "container dark",
            Background::Light => "container",
        }
    }
}

/// Themed page wrapper. Exposes the theme tokens as CSS custom properties so
/// the stylesheet resolves colors from the explicit [`Theme`] value rather
/// than from globals.
#[component]
pub fn Container(
    theme: Theme,
    #[prop(optional)] background: Background,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=background.class() style=theme.css_vars()>
            {children()}
        </div>
    }
}
