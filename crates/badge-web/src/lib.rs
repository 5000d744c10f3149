pub mod app;
pub mod badge;
pub mod class_names;
pub mod components;
pub mod config;
pub mod opener;
pub mod pages;

pub use badge::{BadgeProps, BadgeView, ClickAction, render};
pub use components::BuiltWithBadge;
pub use config::BadgeSettings;
pub use opener::{OpenTarget, OpenUrl, Opener};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let settings = BadgeSettings::from_document();
    leptos::mount::hydrate_body(move || {
        provide_context(settings.clone());
        provide_context(Opener::platform());
        view! { <app::App /> }
    });
}
