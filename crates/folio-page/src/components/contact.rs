//! Contact call-to-action and footer.

use dioxus::prelude::*;
use folio_ui::{Glyph, Icon, SectionTitle};

use crate::catalog::PROFILE;
use crate::state::NavTarget;

#[component]
pub fn Contact() -> Element {
    let whatsapp = PROFILE.whatsapp_url();

    rsx! {
        section {
            id: "{NavTarget::Contact.anchor()}",
            class: "contact",

            SectionTitle { icon: Icon::Mail, title: "Get In Touch", centered: true }

            p { class: "contact-prompt", "Tertarik kolaborasi atau punya project?" }

            a {
                class: "btn btn-primary contact-cta",
                href: "{whatsapp}",
                {Icon::Whatsapp.render(20)}
                " Hubungi Saya"
            }

            div {
                class: "socials",
                {Icon::Github.render(28)}
                {Icon::Linkedin.render(28)}
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            "© {PROFILE.footer_year} {PROFILE.name}"
        }
    }
}
