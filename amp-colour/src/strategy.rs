//! Colour generator strategies
//!
//! Each strategy produces colour assignments for the external legs of its
//! bound tree position together with the Monte-Carlo weight of the
//! assignment. State round-trips through a line-oriented text form that is
//! opaque to the factory.

use crate::error::{ColourError, ColourResult};
use crate::model::ColourLayout;
use amp_core::safeio::{safe_parse, safe_write};
use amp_core::RValue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

const DEFAULT_SEED: u64 = 0;

/// One colour-sampling strategy bound to a tree position.
pub trait ColourGenerator {
    /// Stable strategy tag.
    fn name(&self) -> &'static str;

    /// Type token used by the persistence protocol.
    fn stream_token(&self) -> &'static str;

    /// Produces the next colour assignment.
    fn generate(&mut self);

    /// Current per-leg colour assignment.
    fn colours(&self) -> &[usize];

    /// Monte-Carlo weight of the current assignment.
    fn weight(&self) -> RValue;

    /// Writes the strategy-specific state.
    fn save(&self, w: &mut dyn Write) -> ColourResult<()>;

    /// Restores the strategy-specific state.
    fn load(&mut self, r: &mut dyn BufRead) -> ColourResult<()>;
}

/// Flat per-leg sampling shared by the random strategies.
#[derive(Debug, Clone)]
struct FlatSampler {
    ranges: Vec<usize>,
    colours: Vec<usize>,
    weight: RValue,
    seed: u64,
    rng: StdRng,
}

impl FlatSampler {
    fn new(layout: &ColourLayout, seed: u64) -> Self {
        let ranges = layout.ranges().to_vec();
        let weight = ranges
            .iter()
            .filter(|&&r| r != 0)
            .map(|&r| r as RValue)
            .product();
        Self {
            colours: vec![0; ranges.len()],
            ranges,
            weight,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn sample(&mut self) {
        for (c, &r) in self.colours.iter_mut().zip(&self.ranges) {
            *c = if r == 0 { 0 } else { self.rng.gen_range(0..r) };
        }
    }

    fn save(&self, w: &mut dyn Write) -> ColourResult<()> {
        writeln!(w, "seed {}", self.seed)?;
        write!(w, "colours")?;
        for c in &self.colours {
            write!(w, " {c}")?;
        }
        writeln!(w)?;
        write!(w, "weight ")?;
        safe_write(w, self.weight)?;
        writeln!(w)?;
        Ok(())
    }

    fn load(&mut self, r: &mut dyn BufRead) -> ColourResult<()> {
        let seed_line = read_payload_line(r, "seed")?;
        self.seed = seed_line
            .trim()
            .parse()
            .map_err(|_| ColourError::State(format!("bad seed '{}'", seed_line.trim())))?;
        self.rng = StdRng::seed_from_u64(self.seed);

        let colour_line = read_payload_line(r, "colours")?;
        let colours: Result<Vec<usize>, _> = colour_line
            .split_whitespace()
            .map(|t| t.parse::<usize>())
            .collect();
        let colours =
            colours.map_err(|_| ColourError::State(format!("bad colours '{colour_line}'")))?;
        if colours.len() != self.ranges.len() {
            return Err(ColourError::State(format!(
                "expected {} leg colours, found {}",
                self.ranges.len(),
                colours.len()
            )));
        }
        self.colours = colours;

        let weight_line = read_payload_line(r, "weight")?;
        self.weight = safe_parse(weight_line.trim())
            .map_err(|e| ColourError::State(e.to_string()))?;
        Ok(())
    }
}

/// Reads the next non-empty line and strips the expected keyword.
fn read_payload_line(r: &mut dyn BufRead, keyword: &str) -> ColourResult<String> {
    let mut line = String::new();
    loop {
        line.clear();
        if r.read_line(&mut line)? == 0 {
            return Err(ColourError::State(format!(
                "end of stream while reading '{keyword}'"
            )));
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        return match trimmed.strip_prefix(keyword) {
            Some(rest) => Ok(rest.trim().to_string()),
            None => Err(ColourError::State(format!(
                "expected '{keyword}', found '{trimmed}'"
            ))),
        };
    }
}

/// Flat random sampling over every leg's colour range.
#[derive(Debug, Clone)]
pub struct UniformColours {
    sampler: FlatSampler,
}

impl UniformColours {
    /// Binds a uniform sampler to the layout.
    pub fn new(layout: &ColourLayout) -> Self {
        Self::with_seed(layout, DEFAULT_SEED)
    }

    /// Binds with a reproducible seed.
    pub fn with_seed(layout: &ColourLayout, seed: u64) -> Self {
        Self {
            sampler: FlatSampler::new(layout, seed),
        }
    }
}

impl ColourGenerator for UniformColours {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn stream_token(&self) -> &'static str {
        "uniform"
    }

    fn generate(&mut self) {
        self.sampler.sample();
    }

    fn colours(&self) -> &[usize] {
        &self.sampler.colours
    }

    fn weight(&self) -> RValue {
        self.sampler.weight
    }

    fn save(&self, w: &mut dyn Write) -> ColourResult<()> {
        self.sampler.save(w)
    }

    fn load(&mut self, r: &mut dyn BufRead) -> ColourResult<()> {
        self.sampler.load(r)
    }
}

/// Exhaustive summation over all colour assignments.
///
/// The assignment after construction is the all-zero one; every
/// [`ColourGenerator::generate`] call advances the odometer. After the
/// last assignment the odometer wraps to the start and [`Self::done`]
/// reports the completed sweep.
#[derive(Debug, Clone)]
pub struct ColourSummer {
    ranges: Vec<usize>,
    colours: Vec<usize>,
    done: bool,
}

impl ColourSummer {
    /// Binds a summer to the layout.
    pub fn new(layout: &ColourLayout) -> Self {
        Self {
            colours: vec![0; layout.legs()],
            ranges: layout.ranges().to_vec(),
            done: false,
        }
    }

    /// True once a full sweep has wrapped around.
    pub fn done(&self) -> bool {
        self.done
    }
}

impl ColourGenerator for ColourSummer {
    fn name(&self) -> &'static str {
        "summation"
    }

    fn stream_token(&self) -> &'static str {
        "sum"
    }

    fn generate(&mut self) {
        for (c, &r) in self.colours.iter_mut().zip(&self.ranges) {
            if r == 0 {
                continue;
            }
            *c += 1;
            if *c < r {
                self.done = false;
                return;
            }
            *c = 0;
        }
        self.done = true;
    }

    fn colours(&self) -> &[usize] {
        &self.colours
    }

    fn weight(&self) -> RValue {
        1.0
    }

    fn save(&self, w: &mut dyn Write) -> ColourResult<()> {
        write!(w, "colours")?;
        for c in &self.colours {
            write!(w, " {c}")?;
        }
        writeln!(w)?;
        writeln!(w, "done {}", self.done)?;
        Ok(())
    }

    fn load(&mut self, r: &mut dyn BufRead) -> ColourResult<()> {
        let colour_line = read_payload_line(r, "colours")?;
        let colours: Result<Vec<usize>, _> = colour_line
            .split_whitespace()
            .map(|t| t.parse::<usize>())
            .collect();
        let colours =
            colours.map_err(|_| ColourError::State(format!("bad colours '{colour_line}'")))?;
        if colours.len() != self.ranges.len() {
            return Err(ColourError::State(format!(
                "expected {} leg colours, found {}",
                self.ranges.len(),
                colours.len()
            )));
        }
        self.colours = colours;
        let done_line = read_payload_line(r, "done")?;
        self.done = done_line
            .trim()
            .parse()
            .map_err(|_| ColourError::State(format!("bad done flag '{}'", done_line.trim())))?;
        Ok(())
    }
}

fn check_ranges(
    layout: &ColourLayout,
    n_colours: usize,
    gluon_range: usize,
    basis: &'static str,
) -> ColourResult<()> {
    for (leg, &r) in layout.ranges().iter().enumerate() {
        if r != 0 && r != n_colours && r != gluon_range {
            return Err(ColourError::BasisMismatch {
                leg,
                range: r,
                expected: gluon_range,
                basis,
            });
        }
    }
    Ok(())
}

/// Importance-sampled colour assignment in the adjoint basis.
///
/// Gluon legs range over the `N²−1` adjoint states, (anti)quark legs over
/// the `N` fundamental states. Sampling is flat over each leg's basis,
/// which keeps the summation estimator unbiased.
#[derive(Debug, Clone)]
pub struct AdjointQcd {
    sampler: FlatSampler,
    n_colours: usize,
}

impl AdjointQcd {
    /// Binds an adjoint-basis sampler; every coloured leg must range over
    /// the fundamental or adjoint representation.
    pub fn new(n_colours: usize, layout: &ColourLayout) -> ColourResult<Self> {
        Self::with_seed(n_colours, layout, DEFAULT_SEED)
    }

    /// Binds with a reproducible seed.
    pub fn with_seed(n_colours: usize, layout: &ColourLayout, seed: u64) -> ColourResult<Self> {
        check_ranges(layout, n_colours, n_colours * n_colours - 1, "adjoint")?;
        Ok(Self {
            sampler: FlatSampler::new(layout, seed),
            n_colours,
        })
    }

    /// Number of colours of the bound model.
    pub fn n_colours(&self) -> usize {
        self.n_colours
    }
}

impl ColourGenerator for AdjointQcd {
    fn name(&self) -> &'static str {
        "qcd_adjoint"
    }

    fn stream_token(&self) -> &'static str {
        "qcd"
    }

    fn generate(&mut self) {
        self.sampler.sample();
    }

    fn colours(&self) -> &[usize] {
        &self.sampler.colours
    }

    fn weight(&self) -> RValue {
        self.sampler.weight
    }

    fn save(&self, w: &mut dyn Write) -> ColourResult<()> {
        self.sampler.save(w)
    }

    fn load(&mut self, r: &mut dyn BufRead) -> ColourResult<()> {
        self.sampler.load(r)
    }
}

/// Importance-sampled colour assignment in the colour-flow basis.
///
/// Gluon legs carry a colour/anticolour pair ranging over `N²`; a leg
/// index `k` decomposes as `(k / N, k % N)`.
#[derive(Debug, Clone)]
pub struct ColourFlowQcd {
    sampler: FlatSampler,
    n_colours: usize,
}

impl ColourFlowQcd {
    /// Binds a colour-flow sampler; every coloured leg must range over the
    /// fundamental representation or a full index pair.
    pub fn new(n_colours: usize, layout: &ColourLayout) -> ColourResult<Self> {
        Self::with_seed(n_colours, layout, DEFAULT_SEED)
    }

    /// Binds with a reproducible seed.
    pub fn with_seed(n_colours: usize, layout: &ColourLayout, seed: u64) -> ColourResult<Self> {
        check_ranges(layout, n_colours, n_colours * n_colours, "colour-flow")?;
        Ok(Self {
            sampler: FlatSampler::new(layout, seed),
            n_colours,
        })
    }

    /// Splits a leg's flow index into its (colour, anticolour) pair.
    pub fn flow_pair(&self, index: usize) -> (usize, usize) {
        (index / self.n_colours, index % self.n_colours)
    }
}

impl ColourGenerator for ColourFlowQcd {
    fn name(&self) -> &'static str {
        "qcd_colour_flow"
    }

    fn stream_token(&self) -> &'static str {
        "qcd"
    }

    fn generate(&mut self) {
        self.sampler.sample();
    }

    fn colours(&self) -> &[usize] {
        &self.sampler.colours
    }

    fn weight(&self) -> RValue {
        self.sampler.weight
    }

    fn save(&self, w: &mut dyn Write) -> ColourResult<()> {
        self.sampler.save(w)
    }

    fn load(&mut self, r: &mut dyn BufRead) -> ColourResult<()> {
        self.sampler.load(r)
    }
}
