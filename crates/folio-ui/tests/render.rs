//! Markup tests for the shared components, rendered through dioxus-ssr.

use dioxus::prelude::*;
use folio_ui::{Glyph, Icon, SectionTitle, ThemePreference, ThemedRoot};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_section_title_left_aligned_by_default() {
    fn app() -> Element {
        rsx! { SectionTitle { icon: Icon::User, title: "About Me" } }
    }

    let html = render(app);
    assert!(html.contains(r#"class="section-title""#));
    assert!(!html.contains("section-title-centered"));
    assert!(html.contains("About Me"));
    assert!(html.contains("glyph-user"));
}

#[test]
fn test_section_title_centered() {
    fn app() -> Element {
        rsx! { SectionTitle { icon: Icon::Mail, title: "Get In Touch", centered: true } }
    }

    let html = render(app);
    assert!(html.contains("section-title section-title-centered"));
    assert!(html.contains("glyph-mail"));
}

#[test]
fn test_section_title_glyph_is_32px() {
    fn app() -> Element {
        rsx! { SectionTitle { icon: Icon::Briefcase, title: "Projects" } }
    }

    let html = render(app);
    assert!(html.contains(r#"width="32""#));
    assert!(html.contains(r#"height="32""#));
}

#[test]
fn test_glyph_respects_size() {
    fn app() -> Element {
        rsx! {
            div {
                {Icon::Whatsapp.render(20)}
                {Icon::Github.render(28)}
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"width="20""#));
    assert!(html.contains(r#"width="28""#));
    assert!(html.contains(r#"viewBox="0 0 24 24""#));
}

#[test]
fn test_themed_root_applies_palette() {
    fn light() -> Element {
        rsx! { ThemedRoot { theme: ThemePreference::Light, p { "body" } } }
    }
    fn dark() -> Element {
        rsx! { ThemedRoot { theme: ThemePreference::Dark, p { "body" } } }
    }

    let html = render(light);
    assert!(html.contains("themed-root theme-light"));
    assert!(html.contains(r#"data-theme="light""#));
    assert!(html.contains("<p>body</p>"));

    let html = render(dark);
    assert!(html.contains("themed-root theme-dark"));
    assert!(html.contains(r#"data-theme="dark""#));
}
