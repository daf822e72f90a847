//! Ticketboard - terminal kanban board over a remote ticket list
//!
//! This library crate exposes internal modules for integration testing.

pub mod config;
pub mod data;
pub mod integrations;
pub mod tui;
pub mod util;
