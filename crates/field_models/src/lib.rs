#![forbid(unsafe_code)]
//! field_models: Composable scalar fields and line-segment displacement models.
//!
//! Modules:
//! - field: the [`field::Field`] contract, upstream [`field::Sources`], and reference fields
//! - model: [`model::LineModel`] sampling a field along a 3D segment, its settings and profiles
//!
//! For examples, see the `field_models_examples` crate.
pub mod error;
pub mod field;
pub mod model;

/// Convenient re-exports for common types. Import with `use field_models::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{
        Combine, CombineOp, Constant, Field, FnField, ScaleBias, SharedField, Sources, Translate,
    };
    pub use crate::model::{attenuation_factor, LineModel, LineProfile, LineSettings};
}
