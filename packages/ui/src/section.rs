use dioxus::prelude::*;

use crate::anchor::js_escape;

/// Anchor sections of the single-page site, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 2] = [SectionId::Home, SectionId::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            "home" => Some(SectionId::Home),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Contact => "Contact",
        }
    }
}

/// Provide the selected-section signal to the component tree.
#[component]
pub fn SectionProvider(children: Element) -> Element {
    let selected = use_signal(|| SectionId::Home);
    use_context_provider(|| selected);
    rsx! { {children} }
}

pub fn use_selected_section() -> Signal<SectionId> {
    if let Some(sig) = try_use_context::<Signal<SectionId>>() {
        return sig;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing SectionProvider context, using local signal");
    use_signal(|| SectionId::Home)
}

/// Mark `section` selected every time the element carrying its anchor id
/// enters the viewport. Unlike the entrance animations, this watcher stays
/// armed for the element's whole lifetime.
pub fn use_section_enter(section: SectionId) {
    let mut selected = use_selected_section();
    use_effect(move || {
        let js = enter_watch_js(section.anchor());
        spawn(async move {
            let mut watch = document::eval(&js);
            while let Ok(true) = watch.recv::<bool>().await {
                selected.set(section);
            }
        });
    });
}

fn enter_watch_js(element_id: &str) -> String {
    format!(
        r#"(function(){{
            const el = document.getElementById("{id}");
            if (!el || typeof IntersectionObserver === "undefined") return;
            const watcher = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting) dioxus.send(true);
                }}
            }}, {{ threshold: 0.3 }});
            watcher.observe(el);
        }})()"#,
        id = js_escape(element_id),
    )
}
