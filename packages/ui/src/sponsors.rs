use dioxus::prelude::*;

const SPONSOR_IRONPEAK: Asset = asset!("/assets/sponsor_ironpeak.svg");
const SPONSOR_FITWIRE: Asset = asset!("/assets/sponsor_fitwire.svg");
const SPONSOR_NOVA: Asset = asset!("/assets/sponsor_nova.svg");

/// Logo row under the hero. Only rendered at the medium breakpoint and up;
/// the caller owns that decision.
#[component]
pub fn SponsorStrip() -> Element {
    rsx! {
        div { class: "sponsor_strip",
            div { class: "sponsor_row",
                img { alt: "Ironpeak sponsor", src: SPONSOR_IRONPEAK }
                img { alt: "Fitwire sponsor", src: SPONSOR_FITWIRE }
                img { alt: "Nova Athletic sponsor", src: SPONSOR_NOVA }
            }
        }
    }
}
