//! Selection state management.

use ouvrage::LineId;

/// State related to the selected order line.
///
/// Responsibilities:
/// - Tracking the selected line id
/// - Providing intent-revealing selection queries
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently selected line id
    selected_line_id: Option<LineId>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_line_id = None;
    }

    /// Returns the currently selected line id, if any.
    pub fn selected_line_id(&self) -> Option<LineId> {
        self.selected_line_id
    }

    /// Returns whether the given line is selected.
    pub fn is_selected(&self, line_id: LineId) -> bool {
        self.selected_line_id == Some(line_id)
    }

    /// Selects the given line.
    pub fn select_line(&mut self, line_id: LineId) {
        self.selected_line_id = Some(line_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_clear() {
        let mut state = SelectionState::new();
        assert!(state.selected_line_id().is_none());
        state.select_line(3);
        assert!(state.is_selected(3));
        assert!(!state.is_selected(4));
        state.clear();
        assert!(state.selected_line_id().is_none());
    }
}
