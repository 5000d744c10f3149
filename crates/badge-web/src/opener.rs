//! "Open URL in a new browsing context" capability.
//!
//! The badge never touches `window` directly: it asks an [`Opener`] found in
//! context, so click behaviour can be exercised without a browser.

use leptos::prelude::*;
use std::fmt;
use std::sync::Arc;

/// Where the opened URL should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// Independent tab/window; the current page stays where it is.
    NewContext,
}

impl OpenTarget {
    /// Browsing-context name understood by `window.open`.
    pub fn as_str(self) -> &'static str {
        match self {
            OpenTarget::NewContext => "_blank",
        }
    }
}

/// Something that can open a URL. Fire and forget: nothing is reported back.
pub trait OpenUrl: Send + Sync {
    fn open(&self, url: Option<&str>, target: OpenTarget);
}

/// Cloneable handle to an [`OpenUrl`] implementation, shared through context.
#[derive(Clone)]
pub struct Opener(Arc<dyn OpenUrl>);

impl Opener {
    pub fn new(inner: impl OpenUrl + 'static) -> Self {
        Self(Arc::new(inner))
    }

    /// The opener for the current build: `window.open` when hydrating,
    /// a logging stand-in everywhere else.
    pub fn platform() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(BrowserOpener)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::new(LogOpener)
        }
    }

    pub fn open(&self, url: Option<&str>, target: OpenTarget) {
        self.0.open(url, target);
    }
}

/// The [`Opener`] provided in context, or [`Opener::platform`] when there is none.
pub fn use_opener() -> Opener {
    use_context::<Opener>().unwrap_or_default()
}

impl Default for Opener {
    fn default() -> Self {
        Self::platform()
    }
}

impl fmt::Debug for Opener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Opener")
    }
}

/// Why `window.open` did not produce a new context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenFailure {
    NoWindow,
    /// Popup blocked; `window.open` returned `null`.
    Refused,
    Failed(String),
}

impl OpenFailure {
    /// Console line for a failed attempt to open `url`.
    pub fn message(&self, url: Option<&str>) -> String {
        let url = url.unwrap_or("<unset>");
        match self {
            OpenFailure::NoWindow => format!("no window available, cannot open {}", url),
            OpenFailure::Refused => format!("browser refused to open {} in a new context", url),
            OpenFailure::Failed(e) => format!("window.open({}) failed: {}", url, e),
        }
    }
}

/// Calls `window.open(url, target)` in the browser.
///
/// A missing URL is passed as an empty string, which browsers treat like
/// `undefined` (usually a blank tab). Failures go to the browser console as
/// warnings and are otherwise ignored.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

#[cfg(feature = "hydrate")]
impl OpenUrl for BrowserOpener {
    fn open(&self, url: Option<&str>, target: OpenTarget) {
        let failure = match web_sys::window() {
            None => Some(OpenFailure::NoWindow),
            Some(window) => match window.open_with_url_and_target(url.unwrap_or_default(), target.as_str()) {
                Ok(Some(_)) => None,
                Ok(None) => Some(OpenFailure::Refused),
                Err(e) => Some(OpenFailure::Failed(format!("{:?}", e))),
            },
        };

        if let Some(failure) = failure {
            web_sys::console::warn_1(&failure.message(url).into());
        }
    }
}

/// Used outside the browser, where there is nothing to open.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOpener;

impl OpenUrl for LogOpener {
    fn open(&self, url: Option<&str>, target: OpenTarget) {
        tracing::debug!(?url, target = target.as_str(), "open requested outside the browser");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(Option<String>, OpenTarget)>>);

    impl OpenUrl for Arc<Recorder> {
        fn open(&self, url: Option<&str>, target: OpenTarget) {
            self.0.lock().unwrap().push((url.map(str::to_owned), target));
        }
    }

    fn recording() -> (Arc<Recorder>, Opener) {
        let recorder = Arc::new(Recorder::default());
        (recorder.clone(), Opener::new(recorder))
    }

    #[test]
    fn use_opener_prefers_context() {
        let (recorder, opener) = recording();

        Owner::new().with(move || {
            provide_context(opener);
            use_opener().open(Some("https://example.test"), OpenTarget::NewContext);
        });

        assert_eq!(recorder.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn use_opener_falls_back_without_context() {
        let (recorder, opener) = recording();

        let owner = Owner::new();
        owner.with(move || provide_context(opener));
        Owner::new().with(|| use_opener().open(Some("https://example.test"), OpenTarget::NewContext));

        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn new_context_is_blank() {
        assert_eq!(OpenTarget::NewContext.as_str(), "_blank");
    }

    #[test]
    fn handle_forwards_to_inner() {
        let (recorder, opener) = recording();

        opener.clone().open(Some("https://example.test"), OpenTarget::NewContext);

        let calls = recorder.0.lock().unwrap();
        assert_eq!(*calls, vec![(Some("https://example.test".to_string()), OpenTarget::NewContext)]);
    }

    #[test]
    fn failure_messages_name_the_url() {
        assert_eq!(
            OpenFailure::Refused.message(Some("https://example.test")),
            "browser refused to open https://example.test in a new context"
        );
        assert_eq!(OpenFailure::NoWindow.message(None), "no window available, cannot open <unset>");
        assert_eq!(
            OpenFailure::Failed("JsValue(TypeError)".into()).message(Some("x")),
            "window.open(x) failed: JsValue(TypeError)"
        );
    }

    #[test]
    fn log_opener_accepts_missing_url() {
        LogOpener.open(None, OpenTarget::NewContext);
    }
}
