//! Platform-free core of the holographic trading card.
//!
//! Nothing in this crate touches the DOM. Time flows in as explicit
//! `instant::Instant` values and deferred work is drained by `tick` calls,
//! so the web front-end, the native simulator and the tests all drive the
//! same state machines.

pub mod card;
pub mod config;
pub mod constants;
pub mod controller;
pub mod device;
pub mod effect;
pub mod error;
pub mod perf;
pub mod pointer;
pub mod spring;
pub mod style;
pub mod timer;
pub mod touch;

pub use card::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use device::*;
pub use effect::*;
pub use error::*;
pub use perf::*;
pub use pointer::*;
pub use spring::*;
pub use style::*;
pub use timer::*;
pub use touch::*;
