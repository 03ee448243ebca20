//! State machine behind the searchable single-select.
//!
//! Closed: the input shows the committed value. Open: the input shows the
//! live search buffer and the option list is filtered by it. Selecting an
//! option or dismissing (click outside) closes the list and clears the
//! buffer; only selecting produces a value to commit.

use super::search::filter_options;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    pub search: String,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click or focus on the input.
    pub fn activate(&mut self, disabled: bool) {
        if !disabled {
            self.open = true;
        }
    }

    /// Typing into the input.
    pub fn input(&mut self, text: &str, disabled: bool) {
        if disabled {
            return;
        }
        self.search = text.to_string();
        self.open = true;
    }

    /// Picks an option; returns the value the caller must commit.
    pub fn select(&mut self, option: &str) -> String {
        self.open = false;
        self.search.clear();
        option.to_string()
    }

    /// Click outside the control. Nothing is committed.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.search.clear();
    }

    /// Text shown in the input for the given committed value.
    pub fn display_value(&self, value: &str) -> String {
        if self.open {
            self.search.clone()
        } else {
            value.to_string()
        }
    }

    pub fn is_expanded(&self, disabled: bool) -> bool {
        self.open && !disabled
    }

    pub fn visible_options(&self, options: &[String]) -> Vec<String> {
        filter_options(options, &self.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Vec<String> {
        vec!["Cement".into(), "Steel".into(), "Sand".into()]
    }

    #[test]
    fn test_closed_shows_committed_value() {
        let state = DropdownState::new();
        assert_eq!(state.display_value("Cement"), "Cement");
        assert_eq!(state.display_value(""), "");
    }

    #[test]
    fn test_activate_switches_to_search_buffer() {
        let mut state = DropdownState::new();
        state.activate(false);
        assert!(state.is_expanded(false));
        assert_eq!(state.display_value("Cement"), "");
        state.input("st", false);
        assert_eq!(state.display_value("Cement"), "st");
        assert_eq!(state.visible_options(&opts()), vec!["Steel".to_string()]);
    }

    #[test]
    fn test_select_commits_and_resets() {
        let mut state = DropdownState::new();
        state.input("sa", false);
        let committed = state.select("Sand");
        assert_eq!(committed, "Sand");
        assert!(!state.open);
        assert!(state.search.is_empty());
        assert_eq!(state.display_value(&committed), "Sand");
    }

    #[test]
    fn test_dismiss_keeps_previous_value() {
        let mut state = DropdownState::new();
        let value = "Cement".to_string();
        state.input("ste", false);
        state.dismiss();
        assert!(!state.open);
        assert!(state.search.is_empty());
        assert_eq!(state.display_value(&value), "Cement");
    }

    #[test]
    fn test_disabled_suppresses_opening_and_editing() {
        let mut state = DropdownState::new();
        state.activate(true);
        assert!(!state.open);
        state.input("x", true);
        assert!(!state.open);
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_disabled_while_open_hides_list() {
        let mut state = DropdownState::new();
        state.activate(false);
        assert!(!state.is_expanded(true));
    }

    #[test]
    fn test_empty_filter_result() {
        let mut state = DropdownState::new();
        state.input("zzz", false);
        assert!(state.visible_options(&opts()).is_empty());
    }
}
