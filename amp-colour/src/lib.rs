//! # 🎨 amp-colour — Colour Sampling Strategies
//!
//! Binds a colour-sampling strategy to one process-tree position at setup
//! time. The strategy set is closed: flat random sampling, exhaustive
//! summation, and the two importance-sampled QCD variants selected by the
//! model's colour-treatment trait.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │            ColourFactory                        │
//! │  tag / text stream ──► dispatch                 │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  uniform   → UniformColours               │  │
//! │  │  summation → ColourSummer                 │  │
//! │  │  flow      → AdjointQcd | ColourFlowQcd   │  │
//! │  │  otherwise → None (+ warning)             │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! Generators round-trip through a line-oriented text protocol delimited
//! by literal `<colgen>` … `</colgen>` marker lines; the first payload
//! token selects `sum`, `uniform` or `qcd`, and the remaining payload is
//! strategy-specific. A truncated stream is never fatal: the factory logs
//! a warning and returns `None`.
//!
//! Returned generator boxes are exclusively owned by the caller; the
//! factory keeps no reference.

pub mod error;
pub mod factory;
pub mod model;
pub mod strategy;

pub use error::{ColourError, ColourResult};
pub use factory::{CLOSE_TAG, ColourFactory, GeneratorTag, OPEN_TAG};
pub use model::{ColourLayout, ColourTreatment, ModelColour};
pub use strategy::{AdjointQcd, ColourFlowQcd, ColourGenerator, ColourSummer, UniformColours};
