//! Prelude — convenient single import
//!
//! ```
//! use amp_core::prelude::*;
//! ```

pub use crate::error::{CoreError, CoreResult};
pub use crate::momentum::Momentum;
pub use crate::numeric::{
    NumericConfig, equal_sequences, equals, equals_c, larger, sgn_sq, sgn_sqrt, smaller, times_i,
};
pub use crate::safeio::{safe_parse, safe_write};
pub use crate::spacetime::{DIM, Minkowski};
pub use crate::tensor::TensorSlot;
pub use crate::{CValue, RValue};
