//! HTTP handlers for smart-notes-api.

pub mod health;
pub mod notes;
