//! Safe serialization of floating-point specials
//!
//! Line protocols persisted by the strategy factories must survive NaN and
//! infinities. The wire form maps NaN → `N`, −∞ → `M`, +∞ → `P` and every
//! finite value to its literal decimal representation; parsing is the
//! exact syntactic inverse.

use crate::error::{CoreError, CoreResult};
use crate::RValue;
use std::io;

/// Writes a floating-point value, mapping specials to their single-letter
/// wire form.
pub fn safe_write<W: io::Write + ?Sized>(w: &mut W, x: RValue) -> io::Result<()> {
    if x.is_nan() {
        write!(w, "N")
    } else if x == RValue::NEG_INFINITY {
        write!(w, "M")
    } else if x == RValue::INFINITY {
        write!(w, "P")
    } else {
        write!(w, "{}", x)
    }
}

/// Parses a token produced by [`safe_write`].
///
/// NaN is reconstructed through a self-referential division so the result
/// carries the host's canonical NaN bit pattern.
pub fn safe_parse(token: &str) -> CoreResult<RValue> {
    match token.trim() {
        "N" => {
            let x: RValue = 0.0;
            Ok((x - x) / (x - x))
        }
        "M" => Ok(RValue::NEG_INFINITY),
        "P" => Ok(RValue::INFINITY),
        t => t
            .parse::<RValue>()
            .map_err(|_| CoreError::FloatToken(t.to_string())),
    }
}
