use leptos::*;

/// Right-pointing arrow shown next to the "Get in touch" affordance.
#[component]
pub fn ArrowRight() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="30"
            height="10"
            viewBox="0 0 30 10"
        >
            <path
                fill="#FFF"
                fill-rule="evenodd"
                d="M24.697 0l-.934.881 3.698 3.494H0v1.25h27.461l-3.698 3.494.934.881L30 5z"
            />
        </svg>
    }
}
