//! Closure-backed leaf field.
use glam::DVec3;

use crate::field::Field;

/// Leaf field backed by a closure of the sample position.
///
/// The closure must be deterministic for the field contract to hold.
pub struct FnField<F> {
    func: F,
}

impl<F> FnField<F>
where
    F: Fn(DVec3) -> f64 + Send + Sync,
{
    /// Wraps `func` as a field.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Field for FnField<F>
where
    F: Fn(DVec3) -> f64 + Send + Sync,
{
    fn source_count(&self) -> usize {
        0
    }

    #[inline]
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.func)(DVec3::new(x, y, z))
    }
}

impl<F> std::fmt::Debug for FnField<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnField").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_field_evaluates_closure() {
        let field = FnField::new(|p: DVec3| p.x - p.z);
        assert_eq!(field.source_count(), 0);
        assert_eq!(field.evaluate(5.0, 100.0, 2.0), 3.0);
    }
}
