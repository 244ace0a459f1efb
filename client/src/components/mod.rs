//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, dialogs and forms while reading/writing
//! shared state from Leptos context providers.

pub mod access_code_form;
pub mod actions_panel;
pub mod form_wrapper;
pub mod modal;
pub mod overview_panel;
pub mod site_banner;
pub mod tent_add_panel;
pub mod tent_input;
pub mod toaster;
