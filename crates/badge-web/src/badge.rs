//! Pure render model of the "built with" badge.
//!
//! [`render`] turns [`BadgeProps`] into a [`BadgeView`]; the Leptos component
//! in `components::built_with_badge` only maps that description onto DOM.

use crate::class_names::class_names;
use crate::opener::{OpenTarget, Opener};

/// Class always present on the badge root.
pub const BASE_CLASS: &str = "built-with-badge";
pub const CAPTION: &str = "Build & deploy AI agents with";
pub const BRAND: &str = "Microsoft Foundry";

/// Caller-supplied properties. Both optional, neither validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeProps {
    pub class_name: Option<String>,
    pub agent_playground_url: Option<String>,
}

impl BadgeProps {
    pub fn new(class_name: Option<String>, agent_playground_url: Option<String>) -> Self {
        Self {
            class_name,
            agent_playground_url,
        }
    }
}

/// What a click does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open `url` in a new browsing context. `None` is passed through as-is.
    OpenInNewContext { url: Option<String> },
}

impl ClickAction {
    pub fn dispatch(&self, opener: &Opener) {
        match self {
            ClickAction::OpenInNewContext { url } => {
                tracing::debug!(?url, "badge clicked");
                opener.open(url.as_deref(), OpenTarget::NewContext);
            }
        }
    }
}

/// A decorative or semantic glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub class: &'static str,
    pub aria_hidden: bool,
}

/// Tree description of one rendered badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub class: String,
    /// `type` attribute of the root `<button>`.
    pub button_type: &'static str,
    pub logo: Glyph,
    pub caption: &'static str,
    pub caption_class: &'static str,
    pub brand: &'static str,
    pub brand_class: &'static str,
    pub arrow: Glyph,
    pub on_click: ClickAction,
}

impl BadgeView {
    /// Run the click side effect against `opener`.
    pub fn click(&self, opener: &Opener) {
        self.on_click.dispatch(opener);
    }
}

/// Render `props` into a [`BadgeView`]. Deterministic and side-effect free.
pub fn render(props: &BadgeProps) -> BadgeView {
    BadgeView {
        class: class_names([Some(BASE_CLASS), props.class_name.as_deref()]),
        button_type: "button",
        logo: Glyph {
            class: "built-with-badge__logo",
            aria_hidden: true,
        },
        caption: CAPTION,
        caption_class: "built-with-badge__description",
        brand: BRAND,
        brand_class: "built-with-badge__brand",
        arrow: Glyph {
            class: "built-with-badge__arrow",
            aria_hidden: true,
        },
        on_click: ClickAction::OpenInNewContext {
            url: props.agent_playground_url.clone(),
        },
    }
}
