//! Core application logic: state management and event handling.

pub mod event;
pub mod handler;
pub mod state;
