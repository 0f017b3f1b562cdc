use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dioxus::prelude::*;

use crate::anchor::js_escape;

const REVEAL_CSS: Asset = asset!("/assets/styling/reveal.css");

static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Entrance direction for a revealed block.
#[derive(Clone, Copy, PartialEq)]
pub enum RevealFrom {
    Left,
    Below,
}

impl RevealFrom {
    fn class(self) -> &'static str {
        match self {
            RevealFrom::Left => "reveal reveal_from_left",
            RevealFrom::Below => "reveal reveal_from_below",
        }
    }
}

/// Fire-once entrance animation wrapper.
///
/// The wrapped block starts hidden and slides in the first time half of it
/// crosses into the viewport. The latch never resets: the native observer
/// disconnects itself after the first hit and later notifications are
/// ignored. `delay_ms` defers the start for staggered sequences.
#[component]
pub fn Reveal(
    #[props(default = RevealFrom::Left)] from: RevealFrom,
    #[props(default = 0)] delay_ms: u32,
    children: Element,
) -> Element {
    let element_id =
        use_hook(|| format!("reveal_{}", NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed)));
    let mut shown = use_signal(|| false);

    let watch_id = element_id.clone();
    use_effect(move || {
        let js = observe_once_js(&watch_id, 0.5);
        spawn(async move {
            let mut watch = document::eval(&js);
            if watch.recv::<bool>().await.is_ok() {
                if delay_ms > 0 {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(delay_ms))).await;
                }
                shown.set(true);
            }
        });
    });

    let base = from.class();
    let class = if shown() {
        format!("{base} reveal_shown")
    } else {
        base.to_string()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: REVEAL_CSS }
        div { id: "{element_id}", class: "{class}", {children} }
    }
}

/// One-shot observer: report the first intersection at `threshold` coverage,
/// then disconnect at the source.
fn observe_once_js(element_id: &str, threshold: f64) -> String {
    format!(
        r#"(function(){{
            const el = document.getElementById("{id}");
            if (!el || typeof IntersectionObserver === "undefined") return;
            const watcher = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting) {{
                        watcher.disconnect();
                        dioxus.send(true);
                        return;
                    }}
                }}
            }}, {{ threshold: {threshold} }});
            watcher.observe(el);
        }})()"#,
        id = js_escape(element_id),
        threshold = threshold,
    )
}
