use super::*;

// ====== Nav targets ======

#[test]
fn nav_covers_every_section_in_page_order() {
    let anchors: Vec<&str> = NAV_ITEMS.iter().map(|item| item.anchor).collect();
    assert_eq!(
        anchors,
        ["home", "about", "projects", "skills", "design", "contact"]
    );
}

#[test]
fn every_item_carries_a_distinct_accent() {
    let mut colors: Vec<&str> = NAV_ITEMS.iter().map(|item| item.color).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), NAV_ITEMS.len());
}

// ====== Scroll state ======

#[test]
fn bar_compresses_past_the_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[test]
fn section_is_active_while_it_spans_the_anchor_line() {
    assert!(section_spans_anchor(-300.0, 400.0));
    assert!(section_spans_anchor(100.0, 100.0));
    assert!(!section_spans_anchor(120.0, 700.0));
    assert!(!section_spans_anchor(-500.0, 80.0));
}

#[test]
fn first_spanning_section_wins() {
    let sections = [
        ("home", -900.0, 40.0),
        ("about", 40.0, 700.0),
        ("projects", 700.0, 1400.0),
    ];
    assert_eq!(active_anchor("home", sections.into_iter()), "about");
}

#[test]
fn gap_between_sections_keeps_previous_choice() {
    let sections = [("home", -900.0, -200.0), ("about", 300.0, 900.0)];
    assert_eq!(active_anchor("home", sections.into_iter()), "home");
}

#[test]
fn empty_measurement_keeps_previous_choice() {
    assert_eq!(active_anchor("skills", std::iter::empty()), "skills");
}
