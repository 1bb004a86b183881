//! Constant-valued leaf field.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Field that returns the same value at every position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constant {
    /// The constant value.
    pub value: f64,
}

impl Constant {
    /// Creates a new constant field.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Field for Constant {
    fn source_count(&self) -> usize {
        0
    }

    #[inline]
    fn evaluate(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_ignores_position() {
        let field = Constant::new(2.0);
        assert_eq!(field.source_count(), 0);
        assert_eq!(field.evaluate(0.0, 0.0, 0.0), 2.0);
        assert_eq!(field.evaluate(-1e9, 3.5, 1e12), 2.0);
    }
}
