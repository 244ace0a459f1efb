//! Transient notifications ("toasts").
//!
//! A long-running action pushes a `Loading` toast and later replaces it in
//! place with its outcome, so one action never leaves more than one toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a settled toast stays on screen.
pub const SUCCESS_TTL_MS: u32 = 2_000;
pub const ERROR_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// Auto-dismiss delay; loading toasts stay until replaced.
    #[must_use]
    pub fn ttl_ms(self) -> Option<u32> {
        match self {
            Self::Loading => None,
            Self::Success => Some(SUCCESS_TTL_MS),
            Self::Error => Some(ERROR_TTL_MS),
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Loading => "toast--loading",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a new toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Replace an existing toast in place. Pushes a fresh one if it was
    /// already dismissed. Returns the id of the toast now showing the message.
    pub fn replace(&mut self, id: u64, kind: ToastKind, message: impl Into<String>) -> u64 {
        let message = message.into();
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.kind = kind;
                toast.message = message;
                id
            }
            None => self.push(kind, message),
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
