//! Timer and deferral primitives shared by the editor event loop.
//!
//! Work scheduled here never runs on its own: a [`Debouncer`] only delivers an
//! [`Elapsed`] message to the loop that owns it, which decides whether the
//! message is still current.

mod class;
pub mod debounce;
pub mod deferral;
mod spawn;
mod token;

pub use class::TaskClass;
pub use debounce::{Debouncer, Elapsed};
pub use deferral::AdaptiveDeferral;
pub use spawn::spawn;
