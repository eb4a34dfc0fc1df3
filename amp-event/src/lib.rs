//! # 📤 amp-event — Event Output Interface
//!
//! The boundary between the evaluation engine and an external event sink.
//! An [`InterfaceEngine`] registers named output variables (momenta,
//! reals, integers, booleans) with whatever sink is attached and tracks
//! the byte size of one event record. Every operation across the boundary
//! reports success as a plain `bool`; no panic or error value ever
//! crosses it.
//!
//! [`AsciiSink`] is the bundled sink: an in-memory column store rendering
//! whitespace-separated table rows, with floating-point specials written
//! in their safe single-letter form.

pub mod engine;
pub mod error;
pub mod sink;

pub use engine::InterfaceEngine;
pub use error::{EventError, EventResult};
pub use sink::{AsciiSink, EventSink};

#[cfg(test)]
mod tests;
