//! Domain transformers that move the sample position before delegating.
use glam::DVec3;

use crate::error::Result;
use crate::field::{Field, SharedField, Sources};

/// Field that evaluates its source at `position + offset`.
#[derive(Clone, Debug)]
pub struct Translate {
    sources: Sources,
    /// Offset added to every input position.
    pub offset: DVec3,
}

impl Translate {
    pub const SOURCE_COUNT: usize = 1;

    /// Creates a translation of `source` by `offset`.
    pub fn new(source: SharedField, offset: impl Into<mint::Vector3<f64>>) -> Self {
        Self {
            sources: Sources::from_array([source]),
            offset: DVec3::from(offset.into()),
        }
    }

    /// Creates a translation, failing unless exactly one source is given.
    pub fn try_new(
        sources: Vec<SharedField>,
        offset: impl Into<mint::Vector3<f64>>,
    ) -> Result<Self> {
        Ok(Self {
            sources: Sources::try_new(Self::SOURCE_COUNT, sources)?,
            offset: DVec3::from(offset.into()),
        })
    }

    /// Returns the upstream field.
    pub fn source(&self) -> &SharedField {
        &self.sources[0]
    }
}

impl Field for Translate {
    fn source_count(&self) -> usize {
        Self::SOURCE_COUNT
    }

    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        self.sources[0].evaluate_at(DVec3::new(x, y, z) + self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FnField;

    #[test]
    fn translate_shifts_input_position() {
        let source = FnField::new(|p| p.x * 100.0 + p.y * 10.0 + p.z).into_shared();
        let field = Translate::new(source, [1.0, 2.0, 3.0]);
        assert_eq!(field.evaluate(0.0, 0.0, 0.0), 123.0);
        assert_eq!(field.evaluate(-1.0, -2.0, -3.0), 0.0);
    }

    #[test]
    fn translate_accepts_glam_vectors() {
        let source = FnField::new(|p| p.length_squared()).into_shared();
        let field = Translate::new(source, DVec3::new(3.0, 4.0, 0.0));
        assert_eq!(field.evaluate(0.0, 0.0, 0.0), 25.0);
        assert_eq!(field.offset, DVec3::new(3.0, 4.0, 0.0));
    }
}
