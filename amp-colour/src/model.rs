//! Colour structure of the physics model and of one tree position

use serde::{Deserialize, Serialize};

/// Bookkeeping scheme for the strong-interaction charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColourTreatment {
    /// Gluons carry a single adjoint index.
    Adjoint,
    /// Gluons carry a colour/anticolour index pair.
    ColourFlow,
}

/// Runtime colour traits of the physics model.
///
/// `treatment` is `None` for models whose colour bookkeeping the flow
/// samplers do not handle; the factory then dispatches to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelColour {
    pub coloured: bool,
    pub continuous: bool,
    pub n_colours: usize,
    pub treatment: Option<ColourTreatment>,
}

impl ModelColour {
    /// A model without colour degrees of freedom.
    pub fn uncoloured() -> Self {
        Self {
            coloured: false,
            continuous: false,
            n_colours: 1,
            treatment: None,
        }
    }

    /// A QCD-like model with `n` colours.
    pub fn qcd(n_colours: usize, treatment: ColourTreatment) -> Self {
        Self {
            coloured: true,
            continuous: false,
            n_colours,
            treatment: Some(treatment),
        }
    }
}

/// Colour index ranges of the external legs at one tree position.
///
/// A generator is bound to exactly one layout at construction and targets
/// it for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourLayout {
    ranges: Vec<usize>,
}

impl ColourLayout {
    /// Creates a layout from per-leg colour ranges; zero marks an
    /// uncoloured leg.
    pub fn new(ranges: Vec<usize>) -> Self {
        Self { ranges }
    }

    /// Per-leg ranges.
    pub fn ranges(&self) -> &[usize] {
        &self.ranges
    }

    /// Number of legs.
    pub fn legs(&self) -> usize {
        self.ranges.len()
    }
}
