//! Dropdown selectors - the file, axis and plot pickers.
//!
//! This module contains state management for a select box: a list of
//! options, a highlighted cursor while the list is open, and the confirmed
//! choice (none until the user picks one).

pub mod ui;

/// A select box over options of type `T`.
#[derive(Debug, Clone)]
pub struct Dropdown<T> {
    /// Label shown above the box.
    pub label: String,
    /// Available options.
    options: Vec<T>,
    /// Highlighted option while open.
    cursor: usize,
    /// Scroll offset of the open list.
    pub scroll: usize,
    /// Confirmed option.
    selected: Option<usize>,
    /// Whether the option list is showing.
    pub open: bool,
}

impl<T> Dropdown<T> {
    /// Create a dropdown with nothing selected.
    pub fn new(label: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            label: label.into(),
            options,
            cursor: 0,
            scroll: 0,
            selected: None,
            open: false,
        }
    }

    /// Replace the options; clears the selection.
    pub fn set_options(&mut self, options: Vec<T>) {
        self.options = options;
        self.clear();
    }

    /// Forget the current selection.
    pub fn clear(&mut self) {
        self.selected = None;
        self.cursor = 0;
        self.scroll = 0;
        self.open = false;
    }

    /// Available options.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Highlighted option index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the confirmed option.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The confirmed option.
    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Show the option list, highlighting the current choice.
    pub fn open(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.cursor = self.selected.unwrap_or(0);
        self.open = true;
    }

    /// Hide the option list without changing the choice.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Move cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    /// Confirm the highlighted option and close the list.
    ///
    /// Returns `true` when the choice changed.
    pub fn confirm(&mut self) -> bool {
        self.open = false;
        if self.cursor >= self.options.len() {
            return false;
        }
        let changed = self.selected != Some(self.cursor);
        self.selected = Some(self.cursor);
        changed
    }

    /// Select an option directly.
    pub fn select(&mut self, index: usize) -> bool {
        self.cursor = index;
        self.confirm()
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }

        if self.cursor >= self.scroll + viewport_height {
            self.scroll = self.cursor.saturating_sub(viewport_height - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plots() -> Dropdown<&'static str> {
        Dropdown::new("Select a Plot", vec!["Line", "Bar", "Scatter"])
    }

    #[test]
    fn starts_without_selection() {
        let dd = plots();
        assert_eq!(dd.selected(), None);
        assert!(!dd.open);
    }

    #[test]
    fn confirm_selects_highlighted_option() {
        let mut dd = plots();
        dd.open();
        dd.cursor_down();
        dd.cursor_down();
        dd.cursor_down();
        assert!(dd.confirm());
        assert_eq!(dd.selected(), Some(&"Scatter"));
        assert!(!dd.open);

        dd.open();
        assert_eq!(dd.cursor(), 2);
        assert!(!dd.confirm());
    }

    #[test]
    fn close_keeps_previous_choice() {
        let mut dd = plots();
        dd.select(1);
        dd.open();
        dd.cursor_up();
        dd.close();
        assert_eq!(dd.selected(), Some(&"Bar"));
    }

    #[test]
    fn new_options_reset_selection() {
        let mut dd = plots();
        dd.select(0);
        dd.set_options(vec!["Heatmap"]);
        assert_eq!(dd.selected(), None);
        assert_eq!(dd.cursor(), 0);
    }

    #[test]
    fn empty_dropdown_does_not_open() {
        let mut dd: Dropdown<String> = Dropdown::new("Select a file", Vec::new());
        dd.open();
        assert!(!dd.open);
        assert!(!dd.confirm());
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut dd = Dropdown::new("n", (0..10).collect::<Vec<_>>());
        dd.open();
        for _ in 0..6 {
            dd.cursor_down();
        }
        dd.adjust_scroll(4);
        assert_eq!(dd.scroll, 3);
        for _ in 0..5 {
            dd.cursor_up();
        }
        dd.adjust_scroll(4);
        assert_eq!(dd.scroll, 1);
    }
}
