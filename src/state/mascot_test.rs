use super::*;

#[test]
fn desktop_tap_does_nothing() {
    let mut mascot = Mascot::default();
    assert!(!mascot.tap(false));
    assert!(!mascot.bubble_visible());
}

#[test]
fn mobile_tap_toggles_bubble() {
    let mut mascot = Mascot::default();
    assert!(mascot.tap(true));
    assert!(mascot.bubble_visible());
    assert!(mascot.tap(true));
    assert!(!mascot.bubble_visible());
}

#[test]
fn outside_tap_hides_on_mobile_only() {
    let mut mascot = Mascot::default();
    mascot.tap(true);

    assert!(!mascot.tap_page(false, false));
    assert!(mascot.bubble_visible());

    assert!(!mascot.tap_page(true, true));
    assert!(mascot.bubble_visible());

    assert!(mascot.tap_page(true, false));
    assert!(!mascot.bubble_visible());
}

#[test]
fn outside_tap_with_hidden_bubble_is_noop() {
    let mut mascot = Mascot::default();
    assert!(!mascot.tap_page(true, false));
}
