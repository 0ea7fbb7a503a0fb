//! Secret Santa application library
//!
//! This exposes the public API of the application for testing and external usage.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod services;
pub mod tui;
