//! This crate contains all shared UI for the workspace.

mod breakpoint;
pub use breakpoint::{use_media_query, ViewportQuery, MEDIUM_UP};

mod section;
pub use section::{use_section_enter, use_selected_section, SectionId, SectionProvider};

mod anchor;
pub use anchor::AnchorLink;

mod reveal;
pub use reveal::{Reveal, RevealFrom};

mod action_button;
pub use action_button::ActionButton;

mod navbar;
pub use navbar::Navbar;

mod hero;
pub use hero::Hero;

mod sponsors;
pub use sponsors::SponsorStrip;

mod contact;
pub use contact::Contact;

mod theme;
pub use theme::StudioTheme;
