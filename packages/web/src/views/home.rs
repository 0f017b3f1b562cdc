use dioxus::prelude::*;
use ui::{Contact, Hero};

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        Contact {}
    }
}
