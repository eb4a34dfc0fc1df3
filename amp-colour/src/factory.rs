//! Colour generator factory and dispatcher
//!
//! Produces a bound strategy instance from either a strategy tag or a
//! textual configuration stream. Unrecognized tags, untreated model
//! traits and truncated streams are advisory conditions: the factory logs
//! a warning and returns `None`, never an error.

use crate::model::{ColourLayout, ColourTreatment, ModelColour};
use crate::strategy::{AdjointQcd, ColourFlowQcd, ColourGenerator, ColourSummer, UniformColours};
use crate::ColourResult;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::warn;

/// Opening delimiter line of the persistence protocol.
pub const OPEN_TAG: &str = "<colgen>";

/// Closing delimiter line of the persistence protocol.
pub const CLOSE_TAG: &str = "</colgen>";

/// Strategy selection tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratorTag {
    Uniform,
    Summation,
    FlowSampling,
}

/// Colour generator factory.
///
/// Returned instances are exclusively owned by the caller; the factory
/// retains no reference after return.
#[derive(Debug, Clone, Copy)]
pub struct ColourFactory;

impl ColourFactory {
    /// Creates a generator for the given model, layout and tag.
    ///
    /// Uncoloured models never dispatch and always yield `None`.
    pub fn create(
        model: &ModelColour,
        layout: &ColourLayout,
        tag: GeneratorTag,
    ) -> Option<Box<dyn ColourGenerator>> {
        if !model.coloured {
            return None;
        }
        match tag {
            GeneratorTag::Uniform => Some(Box::new(UniformColours::new(layout))),
            GeneratorTag::Summation => Some(Box::new(ColourSummer::new(layout))),
            GeneratorTag::FlowSampling => Self::flow_generator(model, layout),
        }
    }

    fn flow_generator(
        model: &ModelColour,
        layout: &ColourLayout,
    ) -> Option<Box<dyn ColourGenerator>> {
        match model.treatment {
            Some(ColourTreatment::Adjoint) => {
                Self::checked(AdjointQcd::new(model.n_colours, layout))
            }
            Some(ColourTreatment::ColourFlow) => {
                Self::checked(ColourFlowQcd::new(model.n_colours, layout))
            }
            None => {
                warn!("colour treatment of the model is not handled by flow sampling");
                None
            }
        }
    }

    fn checked<G: ColourGenerator + 'static>(
        result: ColourResult<G>,
    ) -> Option<Box<dyn ColourGenerator>> {
        match result {
            Ok(g) => Some(Box::new(g)),
            Err(e) => {
                warn!(error = %e, "colour generator construction failed");
                None
            }
        }
    }

    /// Creates a generator from a textual configuration stream.
    ///
    /// The stream must contain an [`OPEN_TAG`] line before any payload;
    /// the first payload token selects the strategy, which then reads its
    /// own state; finally the stream is consumed up to and including the
    /// [`CLOSE_TAG`] line, so the cursor is always left in a well-defined
    /// position. End-of-stream before either delimiter produces a warning
    /// and `None`.
    pub fn from_stream(
        model: &ModelColour,
        layout: &ColourLayout,
        r: &mut dyn BufRead,
    ) -> Option<Box<dyn ColourGenerator>> {
        if !model.coloured {
            if !drain_to(r, CLOSE_TAG) {
                warn!("end of stream reached before final tag detected");
            }
            return None;
        }

        if !drain_to(r, OPEN_TAG) {
            warn!("end of stream reached before initial data are read");
            return None;
        }

        let token = match next_token(r) {
            Some(t) => t,
            None => {
                warn!("end of stream reached before a generator type was read");
                return None;
            }
        };

        let mut result: Option<Box<dyn ColourGenerator>> = match token.as_str() {
            "sum" => Some(Box::new(ColourSummer::new(layout))),
            "uniform" => Some(Box::new(UniformColours::new(layout))),
            "qcd" => Self::flow_generator(model, layout),
            other => {
                warn!(token = other, "colour generator type not recognised");
                None
            }
        };

        if let Some(g) = result.as_mut() {
            if let Err(e) = g.load(r) {
                warn!(error = %e, "failed to restore colour generator state");
                result = None;
            }
        }

        if !drain_to(r, CLOSE_TAG) {
            warn!("end of stream reached before final tag detected");
            return None;
        }
        result
    }

    /// Writes a generator in the form [`Self::from_stream`] reads back.
    pub fn to_stream(
        generator: &dyn ColourGenerator,
        w: &mut dyn Write,
    ) -> ColourResult<()> {
        writeln!(w, "{OPEN_TAG}")?;
        writeln!(w, "{}", generator.stream_token())?;
        generator.save(w)?;
        writeln!(w, "{CLOSE_TAG}")?;
        Ok(())
    }
}

/// Consumes lines up to and including the one matching `tag`; false when
/// the stream ends first.
fn drain_to(r: &mut dyn BufRead, tag: &str) -> bool {
    let mut line = String::new();
    loop {
        line.clear();
        match r.read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) if line.trim() == tag => return true,
            Ok(_) => continue,
        }
    }
}

/// Reads the first whitespace-separated token off the next non-empty line.
fn next_token(r: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    loop {
        line.clear();
        match r.read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                if let Some(token) = line.split_whitespace().next() {
                    return Some(token.to_string());
                }
            }
        }
    }
}
