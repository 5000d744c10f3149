use leptos::prelude::*;

use super::glyphs::{ArrowRight, FoundryLogo};
use crate::badge::{BadgeProps, render};
use crate::opener::use_opener;

/// "Build & deploy AI agents with Microsoft Foundry" call-to-action.
///
/// Clicking opens `agent_playground_url` in a new tab through the [`Opener`](crate::opener::Opener)
/// in context (the platform default when none is provided).
#[component]
pub fn BuiltWithBadge(
    /// Extra classes, applied next to the badge's own
    #[prop(optional_no_strip)]
    class_name: Option<String>,
    /// Destination opened on click; passed through unchecked
    #[prop(optional_no_strip)]
    agent_playground_url: Option<String>,
) -> impl IntoView {
    let badge = render(&BadgeProps::new(class_name, agent_playground_url));
    let opener = use_opener();
    let on_click = badge.on_click.clone();

    view! {
        <button
            type=badge.button_type
            class=badge.class
            on:click=move |_| on_click.dispatch(&opener)
        >
            <span class=badge.logo.class>
                <FoundryLogo aria_hidden=badge.logo.aria_hidden />
            </span>
            <span class=badge.caption_class>{badge.caption}</span>
            <span class=badge.brand_class>
                {badge.brand} " "
                <ArrowRight class=badge.arrow.class aria_hidden=badge.arrow.aria_hidden />
            </span>
        </button>
    }
}
