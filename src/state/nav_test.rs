use super::*;

// =============================================================
// Helpers
// =============================================================

fn watched() -> Vec<String> {
    WATCHED_SECTIONS.iter().map(|s| (*s).to_owned()).collect()
}

/// Desktop links for every section plus a mobile link for each of about and contact.
const PAGE_HREFS: [&str; 6] = ["#hero", "#about", "#projects", "#contact", "#about", "#contact"];

fn page() -> NavHighlighter {
    NavHighlighter::new(watched(), PAGE_HREFS.iter().map(|h| NavLink::from_href(h)).collect())
}

fn active_indices(nav: &NavHighlighter) -> Vec<usize> {
    (0..PAGE_HREFS.len()).filter(|&i| nav.is_link_active(i)).collect()
}

// =============================================================
// Link map
// =============================================================

#[test]
fn section_from_href_strips_hash() {
    assert_eq!(section_from_href("#about"), "about");
    assert_eq!(section_from_href("about"), "about");
    assert_eq!(section_from_href(""), "");
}

#[test]
fn links_are_grouped_by_section() {
    let nav = page();
    assert_eq!(nav.links_for("hero"), &[0]);
    assert_eq!(nav.links_for("about"), &[1, 4]);
    assert_eq!(nav.links_for("contact"), &[3, 5]);
    assert!(nav.links_for("experience").is_empty());
}

#[test]
fn links_to_unwatched_sections_are_still_mapped() {
    let nav = NavHighlighter::new(watched(), vec![NavLink::from_href("#skills")]);
    assert_eq!(nav.links_for("skills"), &[0]);
}

#[test]
fn nothing_active_initially() {
    let nav = page();
    assert_eq!(nav.active(), None);
    assert!(active_indices(&nav).is_empty());
}

// =============================================================
// Observe
// =============================================================

#[test]
fn entering_section_marks_exactly_its_links() {
    let mut nav = page();
    let change = nav.observe(&[Visibility::entering("about", 0.2)]).unwrap();
    assert_eq!(change.section, "about");
    assert_eq!(change.marked, vec![1, 4]);
    assert_eq!(active_indices(&nav), vec![1, 4]);
}

#[test]
fn desktop_and_mobile_links_activate_together() {
    let mut nav = page();
    nav.observe(&[Visibility::entering("contact", 0.05)]);
    assert!(nav.is_link_active(3));
    assert!(nav.is_link_active(5));
    assert_eq!(active_indices(&nav).len(), 2);
}

#[test]
fn next_section_replaces_previous() {
    let mut nav = page();
    nav.observe(&[Visibility::entering("hero", 0.5)]);
    nav.observe(&[Visibility::entering("projects", 0.5)]);
    assert_eq!(nav.active(), Some("projects"));
    assert_eq!(active_indices(&nav), vec![2]);
}

#[test]
fn leaving_notifications_keep_current_state() {
    let mut nav = page();
    nav.observe(&[Visibility::entering("about", 0.3)]);
    assert_eq!(nav.observe(&[Visibility::leaving("about")]), None);
    assert_eq!(nav.active(), Some("about"));
}

#[test]
fn empty_batch_changes_nothing() {
    let mut nav = page();
    assert_eq!(nav.observe(&[]), None);
    assert_eq!(nav.active(), None);
}

#[test]
fn section_without_links_clears_all_links() {
    let mut nav = NavHighlighter::new(watched(), vec![NavLink::from_href("#about")]);
    nav.observe(&[Visibility::entering("about", 0.5)]);
    let change = nav.observe(&[Visibility::entering("hero", 0.5)]).unwrap();
    assert!(change.marked.is_empty());
    assert!(!nav.is_link_active(0));
}

// =============================================================
// Batch resolution
// =============================================================

#[test]
fn batch_prefers_greatest_ratio() {
    let mut nav = page();
    let change = nav
        .observe(&[Visibility::entering("about", 0.1), Visibility::entering("projects", 0.4)])
        .unwrap();
    assert_eq!(change.section, "projects");
}

#[test]
fn batch_ties_resolve_by_document_order() {
    let mut nav = page();
    nav.observe(&[Visibility::entering("contact", 0.25), Visibility::entering("about", 0.25)]);
    assert_eq!(nav.active(), Some("about"));
}

#[test]
fn batch_ignores_leaving_entries() {
    let mut nav = page();
    nav.observe(&[Visibility::entering("hero", 0.02), Visibility::leaving("about")]);
    assert_eq!(nav.active(), Some("hero"));
}

#[test]
fn unwatched_section_loses_ties_to_watched() {
    let mut nav = page();
    nav.observe(&[Visibility::entering("footer", 0.5), Visibility::entering("contact", 0.5)]);
    assert_eq!(nav.active(), Some("contact"));
}

#[test]
fn set_active_reports_marked_links() {
    let mut nav = page();
    let change = nav.set_active("contact");
    assert_eq!(change, ActiveLinks { section: "contact".to_owned(), marked: vec![3, 5] });
}
