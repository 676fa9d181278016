//! Mentor TUI - a terminal client for a Mentor learning server.
//!
//! The library exposes its modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod input;
pub mod leveling;
pub mod markdown;
pub mod models;
pub mod notifications;
pub mod prelude;
pub mod router;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod views;
