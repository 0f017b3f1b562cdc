use dioxus::prelude::*;

use crate::section::{use_selected_section, SectionId};

/// In-page link that scrolls its target section into view instead of
/// letting the browser jump, and records the target as selected.
#[component]
pub fn AnchorLink(
    target: SectionId,
    #[props(default = "")] class: &'static str,
    #[props(default)] on_navigate: EventHandler<SectionId>,
    children: Element,
) -> Element {
    let mut selected = use_selected_section();
    rsx! {
        a {
            class: "{class}",
            href: "{target.href()}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                selected.set(target);
                scroll_to(target.anchor());
                on_navigate.call(target);
            },
            {children}
        }
    }
}

/// Smooth-scroll the element with `element_id` into view.
pub(crate) fn scroll_to(element_id: &str) {
    let js = scroll_js(element_id);
    spawn(async move {
        let _ = document::eval(&js).await;
    });
}

fn scroll_js(element_id: &str) -> String {
    format!(
        r#"(function(){{
            const el = document.getElementById("{id}");
            if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});
            return "";
        }})()"#,
        id = js_escape(element_id),
    )
}

pub(crate) fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
