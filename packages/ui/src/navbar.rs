use dioxus::prelude::*;

use crate::breakpoint::{use_media_query, MEDIUM_UP};
use crate::section::{use_selected_section, SectionId};
use crate::{ActionButton, AnchorLink};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top navigation. Inline links with an active-section highlight on wide
/// viewports; a toggle menu below the medium breakpoint.
#[component]
pub fn Navbar() -> Element {
    let above_medium = use_media_query(MEDIUM_UP);
    let selected = use_selected_section();
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { class: "site_nav",
            div { class: "site_nav_inner",
                a { class: "brand", href: "/",
                    span { class: "brand_mark" }
                    span { class: "brand_name", "PULSE" }
                }

                if above_medium() {
                    div { class: "nav_links",
                        for section in SectionId::ALL {
                            AnchorLink {
                                key: "{section.anchor()}",
                                target: section,
                                class: {
                                    let active: &'static str = if selected() == section {
                                        "nav_link nav_link_active"
                                    } else {
                                        "nav_link"
                                    };
                                    active
                                },
                                {section.label()}
                            }
                        }
                        ActionButton { "Join Now" }
                    }
                } else {
                    button {
                        class: "menu_toggle",
                        onclick: move |_| {
                            let next = !menu_open();
                            menu_open.set(next);
                        },
                        "Menu"
                    }
                }
            }

            if !above_medium() && menu_open() {
                div { class: "nav_drawer",
                    for section in SectionId::ALL {
                        AnchorLink {
                            key: "{section.anchor()}",
                            target: section,
                            class: "nav_link",
                            on_navigate: move |_| menu_open.set(false),
                            {section.label()}
                        }
                    }
                }
            }
        }
    }
}
