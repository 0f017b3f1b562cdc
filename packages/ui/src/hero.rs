use dioxus::prelude::*;

use crate::breakpoint::{use_media_query, MEDIUM_UP};
use crate::reveal::{Reveal, RevealFrom};
use crate::section::{use_section_enter, SectionId};
use crate::{ActionButton, AnchorLink, SponsorStrip};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");
const HERO_GRAPHIC: Asset = asset!("/assets/hero_graphic.svg");

#[component]
pub fn Hero() -> Element {
    let above_medium = use_media_query(MEDIUM_UP);
    use_section_enter(SectionId::Home);

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: SectionId::Home.anchor(), class: "hero",
            div { class: "hero_inner",
                div { class: "hero_copy",
                    Reveal { from: RevealFrom::Left,
                        h1 { class: "hero_title", "Find Your Pulse." }
                        p { class: "hero_text",
                            "Unrivaled training floors. Coaching that meets you where you are. "
                            "Studios built for the shape you're chasing. Start today."
                        }
                    }
                    Reveal { from: RevealFrom::Left, delay_ms: 200,
                        div { class: "cta_row",
                            ActionButton { "Join Now" }
                            AnchorLink {
                                target: SectionId::Contact,
                                class: "hero_more",
                                "Learn More"
                            }
                        }
                    }
                }
                div { class: "hero_art",
                    img { class: "hero_graphic", alt: "Training session", src: HERO_GRAPHIC }
                }
            }

            if above_medium() {
                SponsorStrip {}
            }
        }
    }
}
