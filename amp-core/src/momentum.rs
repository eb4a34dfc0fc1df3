//! Minkowski momentum vector

use crate::spacetime::DIM;
use crate::RValue;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Four-momentum with the energy in component 0.
///
/// Momenta are created and owned by the external process tree and assigned
/// exactly once per event; kernels receive them through `Option<&Momentum>`
/// handles and never copy or mutate them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Momentum {
    components: [RValue; DIM],
}

impl Momentum {
    /// Creates a momentum from its components, energy first.
    pub fn new(e: RValue, p1: RValue, p2: RValue, p3: RValue) -> Self {
        Self {
            components: [e, p1, p2, p3],
        }
    }

    /// Creates an on-shell momentum from a mass and spatial components.
    pub fn from_spatial(mass: RValue, p1: RValue, p2: RValue, p3: RValue) -> Self {
        let e = (mass * mass + p1 * p1 + p2 * p2 + p3 * p3).sqrt();
        Self {
            components: [e, p1, p2, p3],
        }
    }

    /// Energy component.
    pub fn energy(&self) -> RValue {
        self.components[0]
    }

    /// Minkowski square `p·p` with signature (+,−,−,−).
    pub fn square(&self) -> RValue {
        self.dot(self)
    }

    /// Minkowski product with another momentum.
    pub fn dot(&self, other: &Momentum) -> RValue {
        self.components[0] * other.components[0]
            - self.components[1] * other.components[1]
            - self.components[2] * other.components[2]
            - self.components[3] * other.components[3]
    }

    /// Spatial momentum magnitude.
    pub fn spatial_norm(&self) -> RValue {
        (self.components[1] * self.components[1]
            + self.components[2] * self.components[2]
            + self.components[3] * self.components[3])
            .sqrt()
    }

    /// Components as a slice, energy first.
    pub fn as_slice(&self) -> &[RValue] {
        &self.components
    }
}

impl Index<usize> for Momentum {
    type Output = RValue;

    fn index(&self, i: usize) -> &RValue {
        &self.components[i]
    }
}
