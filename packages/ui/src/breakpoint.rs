use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

/// Viewport condition shared by the navbar and the home sections. Layouts
/// switch to their wide variant at 1060px and up.
pub const MEDIUM_UP: &str = "(min-width: 1060px)";

/// Live subscription to a viewport media condition.
///
/// Wraps the environment's media-query engine behind an explicit
/// subscribe/unsubscribe pair. Where no engine exists (server rendering,
/// native test builds) the handle is inert and reports `false`.
pub struct ViewportQuery {
    matches: bool,
    inner: Option<platform::Subscription>,
}

impl ViewportQuery {
    /// Subscribe to `condition`, invoking `on_change` with the new truth
    /// value on every native change notification. The returned handle owns
    /// the native listener.
    ///
    /// Conditions the engine rejects yield a dead query that never matches;
    /// nothing here raises.
    pub fn subscribe(condition: &str, on_change: impl FnMut(bool) + 'static) -> Self {
        match platform::subscribe(condition, on_change) {
            Some((matches, sub)) => Self {
                matches,
                inner: Some(sub),
            },
            None => Self {
                matches: false,
                inner: None,
            },
        }
    }

    /// Truth value of the condition sampled when the subscription started.
    pub fn matches(&self) -> bool {
        self.matches
    }

    /// Whether a native listener is currently registered.
    pub fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    /// Release the native listener. Safe to call more than once.
    pub fn unsubscribe(&mut self) {
        if let Some(sub) = self.inner.take() {
            sub.cancel();
        }
    }
}

impl Drop for ViewportQuery {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Reactive breakpoint hook: subscribes on mount, keeps the returned signal
/// in sync with the viewport, and releases the listener on unmount.
///
/// Every caller owns its own subscription; two components watching the same
/// condition stay fully independent.
pub fn use_media_query(condition: &'static str) -> Signal<bool> {
    let mut matches = use_signal(|| false);
    let query = use_hook(|| Rc::new(RefCell::new(None::<ViewportQuery>)));

    let slot = query.clone();
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        let sub = ViewportQuery::subscribe(condition, move |now| matches.set(now));
        matches.set(sub.matches());
        *slot.borrow_mut() = Some(sub);
    });

    use_drop(move || {
        if let Some(mut sub) = query.borrow_mut().take() {
            sub.unsubscribe();
        }
    });

    matches
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    pub(super) struct Subscription {
        list: web_sys::MediaQueryList,
        handler: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
    }

    /// Attach a change listener through `window.matchMedia`. Returns the
    /// initial truth value alongside the listener handle, or `None` when the
    /// engine is unavailable.
    pub(super) fn subscribe(
        condition: &str,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<(bool, Subscription)> {
        let window = web_sys::window()?;
        let list = window.match_media(condition).ok().flatten()?;
        let initial = list.matches();
        let handler = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |event: web_sys::MediaQueryListEvent| on_change(event.matches()),
        );
        list.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
            .ok()?;
        Some((initial, Subscription { list, handler }))
    }

    impl Subscription {
        pub(super) fn cancel(&self) {
            let _ = self.list.remove_event_listener_with_callback(
                "change",
                self.handler.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    /// No viewport concept outside the browser; subscriptions are inert and
    /// the observed value stays `false`.
    pub(super) struct Subscription;

    pub(super) fn subscribe(
        _condition: &str,
        _on_change: impl FnMut(bool) + 'static,
    ) -> Option<(bool, Subscription)> {
        None
    }

    impl Subscription {
        pub(super) fn cancel(&self) {}
    }
}
