//! Mobile navigation overlay state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Inline `display` value for the overlay.
    #[must_use]
    pub fn overlay_display(self) -> &'static str {
        if self.open { "flex" } else { "none" }
    }

    /// Inline `overflow` value for `<body>`; `None` removes the override.
    #[must_use]
    pub fn body_overflow(self) -> Option<&'static str> {
        self.open.then_some("hidden")
    }

    /// Whether a click should close the menu. Only a click on the backdrop
    /// of an open menu counts; clicks inside the panel bubble up with a
    /// different target, and a closed menu has nothing to close.
    #[must_use]
    pub fn closes_on_click(self, target_is_backdrop: bool) -> bool {
        self.open && target_is_backdrop
    }
}
