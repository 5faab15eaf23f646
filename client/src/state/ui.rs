//! Local UI chrome state (language, open menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the auth state so the header
//! can toggle menus without touching the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::Language;

/// UI state for the layout shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub language: Language,
    pub menu_open: bool,
    pub user_menu_open: bool,
    pub language_menu_open: bool,
}

impl UiState {
    /// Close every open menu, e.g. after navigating or logging out.
    pub fn close_menus(&mut self) {
        self.menu_open = false;
        self.user_menu_open = false;
        self.language_menu_open = false;
    }

    /// Switch language and close the picker.
    pub fn select_language(&mut self, language: Language) {
        self.language = language;
        self.language_menu_open = false;
    }
}
