use leptos::prelude::*;

use crate::components::BuiltWithBadge;
use crate::config::BadgeSettings;

#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_context::<BadgeSettings>().unwrap_or_default();

    view! {
        <main class="page">
            <BuiltWithBadge
                class_name=settings.class_name
                agent_playground_url=settings.agent_playground_url
            />
        </main>
    }
}
