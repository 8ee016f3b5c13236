//! bakecal - back-office calendar for a bakery
//!
//! Builds Sunday-anchored month/week/day grids from an injected event list
//! and an injected "today", and ships a CLI and a terminal UI around them.

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;
