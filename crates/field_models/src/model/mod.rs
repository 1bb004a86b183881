//! Models that sample a [`crate::field::Field`] along a lower-dimensional domain.
//!
//! A [`LineModel`] maps a single parameter `p` onto a 3D line segment and returns the
//! field value there, optionally attenuated toward the segment ends. [`LineSettings`]
//! carries its configuration and [`LineProfile`] batches evaluations.
pub mod line;
pub mod profile;
pub mod settings;

pub use line::{attenuation_factor, LineModel};
pub use profile::LineProfile;
pub use settings::LineSettings;
