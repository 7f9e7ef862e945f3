//! Random composition batches (reproducible, replayable draws).
//!
//! Model
//! - Every draw is addressed by a replay token `(seed, index)` mixed into a
//!   single RNG, so batches are streamable and any element can be regenerated
//!   in isolation.
//! - Two sampler families behind one trait: `UniformRatioSampler` (i.i.d.
//!   uniform raw parts followed by L1 closure — the classic quick-and-dirty
//!   composition generator) and `DirichletSampler` (symmetric Dirichlet(α);
//!   α = 1 is the uniform distribution on the simplex).

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Dirichlet, Distribution};

use super::{ComposeError, Composition};

/// Error type shared by all samplers.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
    DegenerateDraw { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateDraw {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::DegenerateDraw { reason } => write!(f, "degenerate draw: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn rng(self) -> StdRng {
        let k = splitmix(self.seed ^ splitmix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

// SplitMix64 finalizer; keeps (seed, index) pairs decorrelated.
fn splitmix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// A single drawn composition plus replay metadata.
#[derive(Clone, Copy, Debug)]
pub struct CompositionSample<const N: usize> {
    pub composition: Composition<N>,
    pub replay: ReplayToken,
}

/// Common trait for reproducible composition sources.
pub trait CompositionSampler<const N: usize> {
    type Params: Clone;

    fn params(&self) -> &Self::Params;

    /// Draw the next composition of the stream.
    fn sample_next(&mut self) -> Result<CompositionSample<N>, SampleError>;

    /// Regenerate a previous draw from its replay token.
    fn resample(&self, replay: ReplayToken) -> Result<Composition<N>, SampleError>;
}

/// Draw `count` compositions from `sampler`, order-preserving.
pub fn sample_batch<const N: usize, S>(
    sampler: &mut S,
    count: usize,
) -> Result<Vec<CompositionSample<N>>, SampleError>
where
    S: CompositionSampler<N>,
{
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(sampler.sample_next()?);
    }
    Ok(out)
}

/// Parameters for the uniform-ratio sampler.
#[derive(Clone, Copy, Debug)]
pub struct RatioParams {
    /// Retry budget for degenerate (near-zero-mass) raw draws.
    pub max_attempts: u32,
}

impl Default for RatioParams {
    fn default() -> Self {
        Self { max_attempts: 8 }
    }
}

impl RatioParams {
    fn validate(&self) -> Result<(), SampleError> {
        if self.max_attempts == 0 {
            return Err(SampleError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Uniform raw parts on [0, 1) followed by L1 closure.
///
/// The resulting distribution is not uniform on the simplex (it piles mass
/// toward the centroid); use `DirichletSampler` with α = 1 for flat coverage.
pub struct UniformRatioSampler<const N: usize> {
    params: RatioParams,
    seed: u64,
    next_index: u64,
}

impl<const N: usize> UniformRatioSampler<N> {
    pub fn new(params: RatioParams, seed: u64) -> Result<Self, SampleError> {
        params.validate()?;
        Ok(Self {
            params,
            seed,
            next_index: 0,
        })
    }

    fn draw(token: ReplayToken) -> Result<Composition<N>, ComposeError> {
        let mut rng = token.rng();
        let raw: [f64; N] = std::array::from_fn(|_| rng.gen::<f64>());
        Composition::normalized(raw)
    }
}

impl<const N: usize> CompositionSampler<N> for UniformRatioSampler<N> {
    type Params = RatioParams;

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn sample_next(&mut self) -> Result<CompositionSample<N>, SampleError> {
        for _ in 0..self.params.max_attempts {
            let token = ReplayToken {
                seed: self.seed,
                index: self.next_index,
            };
            self.next_index = self.next_index.wrapping_add(1);
            match Self::draw(token) {
                Ok(composition) => {
                    return Ok(CompositionSample {
                        composition,
                        replay: token,
                    })
                }
                // Raw mass below tolerance; skip the token and redraw.
                Err(ComposeError::DegenerateSum { .. }) => continue,
                Err(err) => return Err(SampleError::degenerate(err.to_string())),
            }
        }
        Err(SampleError::degenerate(
            "ratio sampler exceeded max_attempts without a valid draw",
        ))
    }

    fn resample(&self, replay: ReplayToken) -> Result<Composition<N>, SampleError> {
        Self::draw(replay).map_err(|err| SampleError::degenerate(err.to_string()))
    }
}

/// Parameters for the symmetric Dirichlet sampler.
#[derive(Clone, Copy, Debug)]
pub struct DirichletParams {
    /// Shared concentration α for all components. α = 1 is uniform on the
    /// simplex; α < 1 favors the corners, α > 1 the centroid.
    pub alpha: f64,
}

impl Default for DirichletParams {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl DirichletParams {
    fn validate(&self) -> Result<(), SampleError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(SampleError::invalid("alpha must be finite and > 0"));
        }
        Ok(())
    }
}

/// Symmetric Dirichlet(α) draws over N components.
pub struct DirichletSampler<const N: usize> {
    params: DirichletParams,
    dist: Dirichlet<f64>,
    seed: u64,
    next_index: u64,
}

impl<const N: usize> DirichletSampler<N> {
    pub fn new(params: DirichletParams, seed: u64) -> Result<Self, SampleError> {
        params.validate()?;
        let dist = Dirichlet::new_with_size(params.alpha, N)
            .map_err(|err| SampleError::invalid(format!("dirichlet: {err}")))?;
        Ok(Self {
            params,
            dist,
            seed,
            next_index: 0,
        })
    }

    fn draw(&self, token: ReplayToken) -> Result<Composition<N>, SampleError> {
        let mut rng = token.rng();
        let parts: Vec<f64> = self.dist.sample(&mut rng);
        let raw: [f64; N] = parts
            .try_into()
            .map_err(|_| SampleError::degenerate("dirichlet draw has wrong arity"))?;
        // Draws sum to 1 up to float noise; re-close so the typed invariant
        // holds exactly within tolerance.
        Composition::normalized(raw).map_err(|err| SampleError::degenerate(err.to_string()))
    }
}

impl<const N: usize> CompositionSampler<N> for DirichletSampler<N> {
    type Params = DirichletParams;

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn sample_next(&mut self) -> Result<CompositionSample<N>, SampleError> {
        let token = ReplayToken {
            seed: self.seed,
            index: self.next_index,
        };
        self.next_index = self.next_index.wrapping_add(1);
        let composition = self.draw(token)?;
        Ok(CompositionSample {
            composition,
            replay: token,
        })
    }

    fn resample(&self, replay: ReplayToken) -> Result<Composition<N>, SampleError> {
        self.draw(replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_draws_are_reproducible() {
        let mut a = UniformRatioSampler::<3>::new(RatioParams::default(), 42).unwrap();
        let mut b = UniformRatioSampler::<3>::new(RatioParams::default(), 42).unwrap();
        for _ in 0..16 {
            let sa = a.sample_next().unwrap();
            let sb = b.sample_next().unwrap();
            assert_eq!(sa.replay, sb.replay);
            assert_eq!(sa.composition.parts(), sb.composition.parts());
        }
    }

    #[test]
    fn ratio_resample_matches_stream() {
        let mut gen = UniformRatioSampler::<4>::new(RatioParams::default(), 7).unwrap();
        let sample = gen.sample_next().unwrap();
        let replayed = gen.resample(sample.replay).unwrap();
        assert_eq!(sample.composition.parts(), replayed.parts());
    }

    #[test]
    fn ratio_draws_are_valid_compositions() {
        let mut gen = UniformRatioSampler::<3>::new(RatioParams::default(), 2025).unwrap();
        for sample in sample_batch(&mut gen, 100).unwrap() {
            let c = sample.composition;
            assert!(c.parts().iter().all(|&p| p >= 0.0));
            assert!((c.sum() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn ratio_rejects_zero_attempts() {
        let err = UniformRatioSampler::<3>::new(RatioParams { max_attempts: 0 }, 1);
        assert!(matches!(err, Err(SampleError::InvalidParams { .. })));
    }

    #[test]
    fn dirichlet_draws_are_valid_and_replayable() {
        let mut gen = DirichletSampler::<4>::new(DirichletParams::default(), 99).unwrap();
        let sample = gen.sample_next().unwrap();
        assert!(sample.composition.parts().iter().all(|&p| p >= 0.0));
        assert!((sample.composition.sum() - 1.0).abs() < 1e-12);
        let replayed = gen.resample(sample.replay).unwrap();
        assert_eq!(sample.composition.parts(), replayed.parts());
    }

    #[test]
    fn dirichlet_rejects_bad_alpha() {
        let err = DirichletSampler::<3>::new(DirichletParams { alpha: 0.0 }, 1);
        assert!(matches!(err, Err(SampleError::InvalidParams { .. })));
    }

    #[test]
    fn distinct_seeds_give_distinct_batches() {
        let mut a = UniformRatioSampler::<3>::new(RatioParams::default(), 1).unwrap();
        let mut b = UniformRatioSampler::<3>::new(RatioParams::default(), 2).unwrap();
        let sa = a.sample_next().unwrap();
        let sb = b.sample_next().unwrap();
        assert_ne!(sa.composition.parts(), sb.composition.parts());
    }
}
