use dioxus::prelude::*;

use crate::reveal::{Reveal, RevealFrom};
use crate::section::{use_section_enter, SectionId};

/// Anchor target for the hero call-to-actions.
#[component]
pub fn Contact() -> Element {
    use_section_enter(SectionId::Contact);

    rsx! {
        section { id: SectionId::Contact.anchor(), class: "contact",
            Reveal { from: RevealFrom::Below,
                h2 { class: "contact_title", "Ready to start?" }
                p { class: "contact_text",
                    "Tell us where you want to be in twelve weeks and a coach will map the route."
                }
                a { class: "action_btn", href: "mailto:hello@pulse.fitness", "Get in touch" }
            }
        }
    }
}
