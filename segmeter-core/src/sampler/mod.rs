//! Periodic sampling
//!
//! A timer context raises the [`TickFlag`]; the polling loop takes it once
//! per iteration and feeds it to the [`SampleCycle`] and [`LedFlash`].

pub mod cycle;
pub mod flash;
pub mod tick;

pub use cycle::{SampleCycle, SamplePhase};
pub use flash::LedFlash;
pub use tick::TickFlag;
