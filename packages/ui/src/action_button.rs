use dioxus::prelude::*;

use crate::anchor::scroll_to;
use crate::section::{use_selected_section, SectionId};

/// Primary call to action: scrolls to the contact section.
#[component]
pub fn ActionButton(children: Element) -> Element {
    let mut selected = use_selected_section();
    rsx! {
        a {
            class: "action_btn",
            href: "{SectionId::Contact.href()}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                selected.set(SectionId::Contact);
                scroll_to(SectionId::Contact.anchor());
            },
            {children}
        }
    }
}
