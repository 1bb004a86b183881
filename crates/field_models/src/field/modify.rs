//! Value modifiers over a single upstream field.
use crate::error::Result;
use crate::field::{Field, SharedField, Sources};

/// Field that applies `value * scale + bias` to its source.
#[derive(Clone, Debug)]
pub struct ScaleBias {
    sources: Sources,
    /// Multiplier applied to the source value.
    pub scale: f64,
    /// Offset added after scaling.
    pub bias: f64,
}

impl ScaleBias {
    pub const SOURCE_COUNT: usize = 1;

    /// Creates a scale/bias modifier over `source`.
    pub fn new(source: SharedField, scale: f64, bias: f64) -> Self {
        Self {
            sources: Sources::from_array([source]),
            scale,
            bias,
        }
    }

    /// Creates a scale/bias modifier, failing unless exactly one source is given.
    pub fn try_new(sources: Vec<SharedField>, scale: f64, bias: f64) -> Result<Self> {
        Ok(Self {
            sources: Sources::try_new(Self::SOURCE_COUNT, sources)?,
            scale,
            bias,
        })
    }

    /// Returns the upstream field.
    pub fn source(&self) -> &SharedField {
        &self.sources[0]
    }
}

impl Field for ScaleBias {
    fn source_count(&self) -> usize {
        Self::SOURCE_COUNT
    }

    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sources[0].evaluate(x, y, z) * self.scale + self.bias
    }
}
