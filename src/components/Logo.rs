use leptos::*;

/// The studio wordmark. Stateless; sized by its parent.
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <svg
            class="wordmark"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 320 48"
            role="img"
            aria-label="Narative"
        >
            <text
                x="0"
                y="36"
                fill="#FFF"
                font-family="inherit"
                font-size="40"
                font-weight="600"
                letter-spacing="6"
            >
                "NARATIVE"
            </text>
        </svg>
    }
}
