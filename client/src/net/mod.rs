//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls; the wire schema itself lives in the shared
//! `inventory` crate.

pub mod api;
