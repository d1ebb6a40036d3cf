//! Embassy async tasks
//!
//! The meter itself runs in `main`; tasks only feed it events.

pub mod tick;

pub use tick::{tick_task, TICK};
