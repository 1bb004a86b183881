//! Batch sampling of a [`LineModel`] into a profile of `(p, value)` pairs.
use rand::Rng as RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::LineModel;

/// Parameters and output values sampled from a line model, ordered by parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineProfile {
    /// Sampled parameters in ascending order.
    pub params: Vec<f64>,
    /// Model output for each parameter.
    pub values: Vec<f64>,
}

impl LineProfile {
    /// Samples `count` evenly spaced parameters covering `[0, 1]` inclusive.
    ///
    /// A single sample is taken at the midpoint.
    pub fn sample_uniform(model: &LineModel, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidConfig("sample count must be > 0".into()));
        }

        let params: Vec<f64> = if count == 1 {
            vec![0.5]
        } else {
            let step = 1.0 / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { 1.0 } else { i as f64 * step })
                .collect()
        };

        Self::from_params(model, params)
    }

    /// Samples `count` parameters drawn uniformly from `[0, 1)`, sorted ascending.
    pub fn sample_random(model: &LineModel, count: usize, rng: &mut dyn RngCore) -> Result<Self> {
        let mut params: Vec<f64> = (0..count).map(|_| rand01(rng)).collect();
        params.sort_by(f64::total_cmp);
        Self::from_params(model, params)
    }

    /// Evaluates the model at each of `params`, keeping their order.
    pub fn from_params(model: &LineModel, params: Vec<f64>) -> Result<Self> {
        let field = model.field()?;
        debug!(
            "Sampling line profile with {} parameters (attenuate: {}, field sources: {}).",
            params.len(),
            model.attenuate(),
            field.source_count()
        );

        let values = params
            .iter()
            .map(|&p| model.evaluate(p))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { params, values })
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if the profile holds no samples.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over `(p, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.params.iter().copied().zip(self.values.iter().copied())
    }

    /// Smallest sampled value, or `None` for an empty profile.
    pub fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    /// Largest sampled value, or `None` for an empty profile.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u32() as f64) / ((u32::MAX as f64) + 1.0)
}
