//! Tent creation form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by `components::tent_add_panel` for as long as the "add tent" modal
//! is open. The component only forwards input events and network results;
//! every decision (identifier status, whether submit is enabled, what the
//! notification says, whether the modal closes) is made here.
//!
//! DESIGN
//! ======
//! The blacklist is an advisory cache seeded from the identifiers of the
//! group's existing tents. The server's unique index stays authoritative and
//! reports collisions the cache missed.
//!
//! Each keystroke is checked against the blacklist as it stood before that
//! keystroke. When the new value is alphabetic-only it then replaces every
//! other alphabetic-only entry, so the blacklist holds at most one of them.

#[cfg(test)]
#[path = "tent_form_test.rs"]
mod tent_form_test;

use inventory::{CreateTentRequest, Movement, Tent, TentSize, TentState, TentType, Unit};

use super::tents::TentsState;
use super::toast::{ToastKind, ToastState};
use super::ui::UiState;
use crate::net::api::GENERIC_ERROR_MESSAGE;

pub const LOADING_MESSAGE: &str = "Ajout en cours ...";
pub const SUCCESS_MESSAGE: &str = "Tente ajoutée";

/// Styling driver for the identifier ring and hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierStatus {
    Empty,
    Available,
    Taken,
}

impl IdentifierStatus {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Empty => "is-empty",
            Self::Available => "is-available",
            Self::Taken => "is-taken",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

fn is_alpha(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TentForm {
    identifier: String,
    taken: bool,
    blacklist: Vec<String>,
    movement: Movement,
    pub state: TentState,
    pub unit: Unit,
    pub size: TentSize,
    pub complete: bool,
    pub integrated: bool,
    pub tent_type: TentType,
    pub comments: String,
    phase: SubmitPhase,
}

impl TentForm {
    /// Fresh form for a group of `movement`, seeded with the identifiers of
    /// its existing tents.
    pub fn new(movement: Movement, existing: impl IntoIterator<Item = String>) -> Self {
        Self {
            identifier: String::new(),
            taken: false,
            blacklist: existing.into_iter().collect(),
            movement,
            state: TentState::default(),
            unit: Unit::default(),
            size: TentSize::default(),
            complete: true,
            integrated: false,
            tent_type: TentType::default(),
            comments: String::new(),
            phase: SubmitPhase::Idle,
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn blacklist(&self) -> &[String] {
        &self.blacklist
    }

    #[must_use]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Handle one edit of the identifier input.
    pub fn set_identifier(&mut self, raw: &str) {
        let value = raw.to_uppercase();
        self.taken = self.blacklist.iter().any(|entry| *entry == value);
        if is_alpha(&value) {
            self.blacklist.retain(|entry| !is_alpha(entry));
            self.blacklist.push(value.clone());
        }
        self.identifier = value;
    }

    #[must_use]
    pub fn status(&self) -> IdentifierStatus {
        if self.identifier.is_empty() {
            IdentifierStatus::Empty
        } else if self.taken {
            IdentifierStatus::Taken
        } else {
            IdentifierStatus::Available
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status() == IdentifierStatus::Available && self.phase == SubmitPhase::Idle
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Ajouter",
            SubmitPhase::Submitting => "Ajout ...",
        }
    }

    /// Units the group's movement offers, in display order.
    #[must_use]
    pub fn unit_options(&self) -> &'static [Unit] {
        self.movement.units()
    }

    /// Payload for `POST /api/tents` from the current field values.
    #[must_use]
    pub fn request(&self) -> CreateTentRequest {
        CreateTentRequest {
            identifying_string: self.identifier.clone(),
            state: self.state,
            size: self.size,
            unit: self.unit,
            complete: self.complete,
            integrated: self.integrated,
            tent_type: self.tent_type,
            comments: self.comments.clone(),
        }
    }

    /// Enter `Submitting` and return the payload, or `None` when submit is
    /// currently disabled.
    pub fn begin_submit(&mut self) -> Option<CreateTentRequest> {
        if !self.can_submit() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.request())
    }

    /// Leave `Submitting` once the create request settled.
    pub fn settle(&mut self, result: &Result<Tent, String>) -> Settlement {
        self.phase = SubmitPhase::Idle;
        Settlement::from_result(result)
    }
}

/// What the UI does once a create request settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub toast_kind: ToastKind,
    pub toast_message: String,
    pub close_modal: bool,
}

impl Settlement {
    fn from_result(result: &Result<Tent, String>) -> Self {
        match result {
            Ok(_) => Self {
                toast_kind: ToastKind::Success,
                toast_message: SUCCESS_MESSAGE.to_owned(),
                close_modal: true,
            },
            Err(message) => {
                let message = message.trim();
                Self {
                    toast_kind: ToastKind::Error,
                    toast_message: if message.is_empty() { GENERIC_ERROR_MESSAGE } else { message }.to_owned(),
                    close_modal: false,
                }
            }
        }
    }

    /// Outcome for a request whose form was cancelled before it settled. The
    /// modal is left alone: it is either closed already or hosts a new form.
    #[must_use]
    pub fn detached(result: &Result<Tent, String>) -> Self {
        Self { close_modal: false, ..Self::from_result(result) }
    }

    /// Apply the outcome to the shared UI state: the loading toast becomes the
    /// outcome toast, the collection is invalidated whatever the outcome, and
    /// the modal closes on success. Returns the id of the outcome toast.
    pub fn apply(&self, toasts: &mut ToastState, loading_id: u64, tents: &mut TentsState, ui: &mut UiState) -> u64 {
        let id = toasts.replace(loading_id, self.toast_kind, self.toast_message.clone());
        tents.invalidate();
        if self.close_modal {
            ui.close();
        }
        id
    }
}
