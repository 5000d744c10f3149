//! Site-level badge settings.
//!
//! The server reads them from a TOML file or the environment and writes them
//! into `<meta>` tags; the hydrating client reads the same tags back so both
//! sides render identical markup.

use serde::Deserialize;

use crate::badge::BadgeProps;

/// `<meta name=...>` carrying the playground URL.
pub const META_PLAYGROUND_URL: &str = "agent-playground-url";
/// `<meta name=...>` carrying the extra badge class.
pub const META_BADGE_CLASS: &str = "badge-class";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BadgeSettings {
    #[serde(default)]
    pub agent_playground_url: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
}

impl BadgeSettings {
    pub fn new(agent_playground_url: Option<String>, class_name: Option<String>) -> Self {
        Self {
            agent_playground_url: non_empty(agent_playground_url),
            class_name: non_empty(class_name),
        }
    }

    pub fn props(&self) -> BadgeProps {
        BadgeProps::new(self.class_name.clone(), self.agent_playground_url.clone())
    }

    /// Read the settings the server embedded in the page head.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let read = |name: &str| {
            document
                .as_ref()
                .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", name)).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
        };

        Self::new(read(META_PLAYGROUND_URL), read(META_BADGE_CLASS))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(feature = "ssr")]
pub use loader::*;

#[cfg(feature = "ssr")]
mod loader {
    use anyhow::{Context, Result};
    use serde::Deserialize;
    use std::path::Path;

    use super::BadgeSettings;

    pub const ENV_PLAYGROUND_URL: &str = "AGENT_PLAYGROUND_URL";
    pub const ENV_BADGE_CLASS: &str = "BADGE_CLASS";

    #[derive(Debug, Deserialize)]
    struct FileConfig {
        #[serde(default)]
        badge: BadgeSettings,
    }

    impl BadgeSettings {
        /// Load from `path` when given, otherwise from the environment.
        pub fn load(path: Option<&Path>) -> Result<Self> {
            match path {
                Some(p) => Self::load_from_file(p),
                None => Ok(Self::from_env_with(|key| std::env::var(key).ok())),
            }
        }

        pub fn load_from_file(path: &Path) -> Result<Self> {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Self::from_toml_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
        }

        pub fn from_toml_str(content: &str) -> Result<Self> {
            let file: FileConfig = toml::from_str(content)?;
            let b = file.badge;
            Ok(Self::new(b.agent_playground_url, b.class_name))
        }

        /// Build from environment lookups (`AGENT_PLAYGROUND_URL`, `BADGE_CLASS`).
        pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
            Self::new(lookup(ENV_PLAYGROUND_URL), lookup(ENV_BADGE_CLASS))
        }
    }
}
