//! Click behaviour of the badge through the public API, with a recording opener.

use std::sync::{Arc, Mutex};

use badge_web::{BadgeProps, OpenTarget, OpenUrl, Opener, render};

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<(Option<String>, OpenTarget)>>,
}

struct Shared(Arc<Recorder>);

impl OpenUrl for Shared {
    fn open(&self, url: Option<&str>, target: OpenTarget) {
        self.0.calls.lock().unwrap().push((url.map(str::to_owned), target));
    }
}

fn opener() -> (Arc<Recorder>, Opener) {
    let recorder = Arc::new(Recorder::default());
    (recorder.clone(), Opener::new(Shared(recorder)))
}

#[test]
fn each_click_opens_once() {
    let (recorder, opener) = opener();
    let badge = render(&BadgeProps::new(None, Some("https://example.test/playground".into())));

    badge.click(&opener);
    badge.click(&opener);

    let calls = recorder.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert!(
        calls
            .iter()
            .all(|c| *c == (Some("https://example.test/playground".to_string()), OpenTarget::NewContext))
    );
}

#[test]
fn unset_destination_is_not_replaced() {
    let (recorder, opener) = opener();

    render(&BadgeProps::new(Some("extra".into()), None)).click(&opener);

    assert_eq!(*recorder.calls.lock().unwrap(), vec![(None, OpenTarget::NewContext)]);
}

#[test]
fn class_override_does_not_touch_click() {
    let plain = render(&BadgeProps::new(None, Some("https://example.test".into())));
    let styled = render(&BadgeProps::new(Some("extra".into()), Some("https://example.test".into())));

    assert_eq!(plain.on_click, styled.on_click);
    assert_eq!(plain.class, "built-with-badge");
    assert_eq!(styled.class, "built-with-badge extra");
}
