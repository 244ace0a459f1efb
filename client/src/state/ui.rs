//! Local UI chrome state (which modal is open).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`tents`) so
//! the dashboard and the forms can open and close dialogs independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Dialogs the application can show on top of a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    AddTent,
}

/// UI state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub modal: Option<Modal>,
}

impl UiState {
    pub fn open(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    #[must_use]
    pub fn is_open(&self, modal: Modal) -> bool {
        self.modal == Some(modal)
    }
}
