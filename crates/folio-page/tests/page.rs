//! Rendering tests for the full page.
//!
//! The page is mounted in a `VirtualDom` and serialized with dioxus-ssr; the
//! assertions look at the markup a user would be shown, on first paint and
//! after the page context's actions run.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_page::catalog::{PROFILE, PROJECTS, SKILLS};
use folio_page::components::PortfolioPage;
use folio_page::state::{NavTarget, PageContext, use_page_context};
use folio_storage::{InMemorySlotStore, SlotStore};
use folio_ui::{THEME_SLOT, ThemeStore};

fn root(store: ThemeStore) -> Element {
    rsx! { PortfolioPage { store } }
}

fn render_page(slot: Arc<dyn SlotStore>) -> String {
    let mut dom = VirtualDom::new_with_props(root, ThemeStore::new(slot));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Root that creates the page context itself and hands a copy back to the
/// test, so signals can be driven from outside the tree.
#[derive(Clone)]
struct Harness {
    store: ThemeStore,
    ctx: Rc<Cell<Option<PageContext>>>,
}

fn harness_root(harness: Harness) -> Element {
    let ctx = use_page_context(harness.store.clone());
    harness.ctx.set(Some(ctx));
    rsx! { PortfolioPage { store: harness.store } }
}

/// Text of every `tech-tag` span in `html`, in document order.
fn tech_tags(html: &str) -> Vec<&str> {
    const MARKER: &str = r#"class="tech-tag">"#;
    html.match_indices(MARKER)
        .map(|(start, _)| {
            let rest = &html[start + MARKER.len()..];
            &rest[..rest.find('<').unwrap_or(rest.len())]
        })
        .collect()
}

#[test]
fn test_one_card_per_project() {
    let html = render_page(Arc::new(InMemorySlotStore::new()));

    assert_eq!(html.matches(r#"class="project-card""#).count(), PROJECTS.len());
    assert_eq!(PROJECTS.len(), 3);
    for project in PROJECTS {
        assert!(html.contains(project.title), "missing card for {}", project.title);
        assert!(html.contains(project.image));
    }
}

#[test]
fn test_each_card_lists_its_tech_in_order() {
    let html = render_page(Arc::new(InMemorySlotStore::new()));

    let cards: Vec<&str> = html.split(r#"class="project-card""#).skip(1).collect();
    assert_eq!(cards.len(), PROJECTS.len());

    for (card, project) in cards.iter().zip(PROJECTS) {
        assert_eq!(tech_tags(card), project.tech, "tags of {}", project.title);
    }
}

#[test]
fn test_one_chip_per_skill() {
    let html = render_page(Arc::new(InMemorySlotStore::new()));
    assert_eq!(html.matches(r#"class="skill-chip""#).count(), SKILLS.len());
}

#[test]
fn test_empty_storage_renders_light_with_menu_closed() {
    let slot = Arc::new(InMemorySlotStore::new());
    let html = render_page(slot.clone());

    assert!(html.contains("themed-root theme-light"));
    assert!(html.contains("🌙"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains("nav-drawer"));

    // Mounting only reads the preference
    assert!(slot.is_empty());
}

#[test]
fn test_stored_dark_renders_dark() {
    let slot = Arc::new(InMemorySlotStore::with_slots([(THEME_SLOT, "dark")]));
    let html = render_page(slot);

    assert!(html.contains("themed-root theme-dark"));
    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains("☀️"));
}

#[test]
fn test_navigation_links_and_sections() {
    let html = render_page(Arc::new(InMemorySlotStore::new()));

    assert_eq!(html.matches(r#"class="nav-link""#).count(), NavTarget::ALL.len());
    for target in NavTarget::ALL {
        assert!(html.contains(&format!(r##"href="{}""##, target.href())));
        assert!(html.contains(&format!(r#"id="{}""#, target.anchor())));
    }
    assert!(html.contains("My Portopolio"));
}

#[test]
fn test_contact_and_footer() {
    let html = render_page(Arc::new(InMemorySlotStore::new()));

    assert!(html.contains(&format!(r#"href="{}""#, PROFILE.whatsapp_url())));
    assert!(html.contains("Hubungi Saya"));
    assert!(html.contains("glyph-github"));
    assert!(html.contains("glyph-linkedin"));
    assert!(html.contains("© 2024 Sansan Syahrul"));
}

#[test]
fn test_context_actions_rerender_mounted_page() {
    let slot = Arc::new(InMemorySlotStore::new());
    let harness = Harness {
        store: ThemeStore::new(slot.clone()),
        ctx: Rc::new(Cell::new(None)),
    };
    let handle = harness.ctx.clone();

    let mut dom = VirtualDom::new_with_props(harness_root, harness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("themed-root theme-light"));
    assert!(!html.contains("nav-drawer"));

    let mut ctx = handle.get().expect("context provided on mount");

    // Theme toggle re-renders the palette and persists the token
    dom.in_runtime(|| {
        ctx.toggle_theme();
    });
    let _ = dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("themed-root theme-dark"));
    assert!(html.contains("☀️"));
    assert_eq!(slot.get(THEME_SLOT).unwrap().as_deref(), Some("dark"));

    // Hamburger opens the drawer with one link per target
    dom.in_runtime(|| ctx.toggle_menu());
    let _ = dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains(r#"aria-expanded="true""#));
    assert_eq!(
        html.matches(r#"class="nav-drawer-link""#).count(),
        NavTarget::ALL.len()
    );

    // Following a drawer link closes it again
    let href = dom.in_runtime(|| ctx.select(NavTarget::Projects));
    assert_eq!(href, "#projects");
    let _ = dom.render_immediate_to_vec();
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("nav-drawer"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains("themed-root theme-dark"));
}
