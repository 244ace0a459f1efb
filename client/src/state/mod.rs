//! Client-side state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each module is a plain data struct with pure transitions. Components wrap
//! them in `RwSignal`s and only forward events, so every rule here is unit
//! tested without a browser.

pub mod auth;
pub mod banner;
pub mod overview;
pub mod tent_form;
pub mod tents;
pub mod toast;
pub mod ui;
