//! Type definitions for bakecal

mod calendar;
mod error;
mod event;

pub use calendar::*;
pub use error::*;
pub use event::*;
