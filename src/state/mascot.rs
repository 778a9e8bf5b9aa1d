//! Mascot speech bubble.
//!
//! Desktop shows the bubble on hover through CSS alone. On narrow viewports
//! a tap toggles it and a tap anywhere else hides it.

#[cfg(test)]
#[path = "mascot_test.rs"]
mod mascot_test;

/// Media query for the tap-driven layout.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Class revealing the bubble.
pub const BUBBLE_CLASS: &str = "show-bubble";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mascot {
    bubble_visible: bool,
}

impl Mascot {
    #[must_use]
    pub fn bubble_visible(self) -> bool {
        self.bubble_visible
    }

    /// Tap on the mascot. Returns whether the bubble changed.
    pub fn tap(&mut self, mobile: bool) -> bool {
        if !mobile {
            return false;
        }
        self.bubble_visible = !self.bubble_visible;
        true
    }

    /// Tap somewhere on the page. Returns whether the bubble changed.
    pub fn tap_page(&mut self, mobile: bool, inside_mascot: bool) -> bool {
        if !mobile || inside_mascot || !self.bubble_visible {
            return false;
        }
        self.bubble_visible = false;
        true
    }
}
