//! Binary combiners over two upstream fields.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{Field, SharedField, Sources};

/// Operation applied by a [`Combine`] field to its two source values.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombineOp {
    Add,
    Multiply,
    Min,
    Max,
}

impl CombineOp {
    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            CombineOp::Add => a + b,
            CombineOp::Multiply => a * b,
            CombineOp::Min => a.min(b),
            CombineOp::Max => a.max(b),
        }
    }
}

/// Field combining the outputs of two source fields.
#[derive(Clone, Debug)]
pub struct Combine {
    op: CombineOp,
    sources: Sources,
}

impl Combine {
    pub const SOURCE_COUNT: usize = 2;

    /// Creates a combiner from exactly two source fields.
    pub fn try_new(op: CombineOp, sources: Vec<SharedField>) -> Result<Self> {
        Ok(Self {
            op,
            sources: Sources::try_new(Self::SOURCE_COUNT, sources)?,
        })
    }

    /// Creates a combiner from two source fields.
    pub fn new(op: CombineOp, a: SharedField, b: SharedField) -> Self {
        Self {
            op,
            sources: Sources::from_array([a, b]),
        }
    }

    pub fn add(a: SharedField, b: SharedField) -> Self {
        Self::new(CombineOp::Add, a, b)
    }

    pub fn multiply(a: SharedField, b: SharedField) -> Self {
        Self::new(CombineOp::Multiply, a, b)
    }

    pub fn min(a: SharedField, b: SharedField) -> Self {
        Self::new(CombineOp::Min, a, b)
    }

    pub fn max(a: SharedField, b: SharedField) -> Self {
        Self::new(CombineOp::Max, a, b)
    }

    /// Returns the combining operation.
    pub fn op(&self) -> CombineOp {
        self.op
    }

    /// Returns the upstream fields.
    pub fn sources(&self) -> &Sources {
        &self.sources
    }
}

impl Field for Combine {
    fn source_count(&self) -> usize {
        Self::SOURCE_COUNT
    }

    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        let a = self.sources[0].evaluate(x, y, z);
        let b = self.sources[1].evaluate(x, y, z);
        self.op.apply(a, b)
    }
}
