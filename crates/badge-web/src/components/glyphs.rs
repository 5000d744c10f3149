use leptos::prelude::*;

/// Microsoft Foundry brand mark
#[component]
pub fn FoundryLogo(#[prop(optional)] aria_hidden: bool) -> impl IntoView {
    let role = (!aria_hidden).then_some("img");
    let label = (!aria_hidden).then_some("Microsoft Foundry logo");
    let hidden = aria_hidden.then_some("true");

    view! {
        <svg
            width="20"
            height="20"
            viewBox="0 0 24 24"
            role=role
            aria-label=label
            aria-hidden=hidden
        >
            <path d="M8.6 2h6.2l-5.9 20H2.7z" fill="#0a4ea3" />
            <path d="M14.8 2h3.3c1.6 0 2.8 1.5 2.4 3.1L16.3 22h-7.4z" fill="#2f8ff0" />
            <path d="M8.9 22l2.3-7.7h6.2L15.1 22z" fill="#8fc7ff" />
        </svg>
    }
}

/// Right-pointing arrow, 16px, filled
#[component]
pub fn ArrowRight(#[prop(into)] class: String, #[prop(optional)] aria_hidden: bool) -> impl IntoView {
    let hidden = aria_hidden.then_some("true");

    view! {
        <svg
            class=class
            width="16"
            height="16"
            viewBox="0 0 16 16"
            fill="currentColor"
            aria-hidden=hidden
        >
            <path d="M8.65 2.15a.5.5 0 0 0-.7.7L12.79 7.5H2.5a.5.5 0 0 0 0 1h10.29l-4.84 4.65a.5.5 0 0 0 .7.7l5.5-5.3a.75.75 0 0 0 0-1.1l-5.5-5.3z" />
        </svg>
    }
}
