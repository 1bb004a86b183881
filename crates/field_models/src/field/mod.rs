//! Scalar field contract and reference implementations.
//!
//! A [`Field`] is a deterministic scalar function of 3D position. Fields compose:
//! combiners and transformers hold their upstream fields in [`Sources`] and declare
//! how many they need through [`Field::source_count`].
//!
//! - Implement [`Field`] for custom generators.
//! - Share fields between models and combiners as [`SharedField`].
use std::sync::Arc;

use glam::DVec3;

pub mod combine;
pub mod constant;
pub mod function;
pub mod modify;
pub mod sources;
pub mod transform;

pub use combine::{Combine, CombineOp};
pub use constant::Constant;
pub use function::FnField;
pub use modify::ScaleBias;
pub use sources::Sources;
pub use transform::Translate;

/// Reference-counted handle to a field, shared by every model or combiner that reads it.
pub type SharedField = Arc<dyn Field>;

/// Trait for continuous scalar fields over 3D space.
///
/// Implementations must be pure: repeated calls with the same position and
/// unchanged internal state return the same value. No range is imposed on
/// inputs or outputs.
pub trait Field: Send + Sync {
    /// Number of upstream fields this field composes, fixed at construction.
    fn source_count(&self) -> usize;

    /// Evaluates the field at `(x, y, z)`.
    fn evaluate(&self, x: f64, y: f64, z: f64) -> f64;

    /// Evaluates the field at `p`.
    #[inline]
    fn evaluate_at(&self, p: DVec3) -> f64 {
        self.evaluate(p.x, p.y, p.z)
    }

    /// Wraps the field into a [`SharedField`].
    fn into_shared(self) -> SharedField
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}
