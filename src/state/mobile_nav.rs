//! Mobile menu open/closed flag.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

/// Class hiding the mobile menu panel.
pub const HIDDEN_CLASS: &str = "hidden";

/// Icon shown on the menu button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Menu,
    Close,
}

impl MenuIcon {
    /// Lucide icon name.
    #[must_use]
    pub fn lucide_name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Close => "x",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// State matching the markup: a panel without the `hidden` class is open.
    #[must_use]
    pub fn from_hidden(hidden: bool) -> Self {
        Self { open: !hidden }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn icon(self) -> MenuIcon {
        if self.open { MenuIcon::Close } else { MenuIcon::Menu }
    }

    pub fn toggle(&mut self) -> MenuIcon {
        self.open = !self.open;
        self.icon()
    }

    /// Close after a nav link inside the menu was followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}
