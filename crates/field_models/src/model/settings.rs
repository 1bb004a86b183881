//! Configuration for [`LineModel`]s.
//!
//! [`LineSettings`] is plain data describing a segment and its attenuation flag. It can be
//! validated independently, serialized with the `serde` feature, and applied to a model.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::field::SharedField;
use crate::model::LineModel;

/// Segment endpoints and attenuation flag for a [`LineModel`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct LineSettings {
    /// Start of the segment, reached at `p = 0`.
    pub start: [f64; 3],
    /// End of the segment, reached at `p = 1`.
    pub end: [f64; 3],
    /// Whether output fades to zero toward both ends.
    pub attenuate: bool,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            start: [0.0, 0.0, 0.0],
            end: [1.0, 1.0, 1.0],
            attenuate: true,
        }
    }
}

impl LineSettings {
    /// Creates settings for the segment from `start` to `end` with attenuation enabled.
    pub fn new(start: [f64; 3], end: [f64; 3]) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    /// Sets the start point.
    pub fn with_start(mut self, start: [f64; 3]) -> Self {
        self.start = start;
        self
    }

    /// Sets the end point.
    pub fn with_end(mut self, end: [f64; 3]) -> Self {
        self.end = end;
        self
    }

    /// Sets the attenuation flag.
    pub fn with_attenuate(mut self, attenuate: bool) -> Self {
        self.attenuate = attenuate;
        self
    }

    /// Validates the settings, returning an error if invalid.
    ///
    /// Coinciding endpoints are allowed.
    pub fn validate(&self) -> Result<()> {
        if !self.start.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidConfig(
                "start must be finite in all components".into(),
            ));
        }
        if !self.end.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidConfig(
                "end must be finite in all components".into(),
            ));
        }

        Ok(())
    }
}

impl LineModel {
    /// Creates a model from validated settings sampling `field`.
    pub fn try_from_settings(settings: &LineSettings, field: SharedField) -> Result<Self> {
        let mut model = LineModel::with_field(field);
        model.apply_settings(settings)?;
        Ok(model)
    }

    /// Validates `settings` and overwrites this model's segment and attenuation flag.
    ///
    /// The field is left untouched. On error the model is not modified.
    pub fn apply_settings(&mut self, settings: &LineSettings) -> Result<()> {
        settings.validate()?;

        let [x0, y0, z0] = settings.start;
        let [x1, y1, z1] = settings.end;
        self.set_start_point(x0, y0, z0);
        self.set_end_point(x1, y1, z1);
        self.set_attenuate(settings.attenuate);

        if self.is_degenerate() {
            debug!(
                "Line segment start and end coincide at {:?}; output is constant in position.",
                self.start()
            );
        }

        Ok(())
    }

    /// Exports the current segment and attenuation flag.
    pub fn settings(&self) -> LineSettings {
        LineSettings {
            start: self.start().to_array(),
            end: self.end().to_array(),
            attenuate: self.attenuate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Constant, Field};
    use glam::DVec3;

    #[test]
    fn defaults_match_model_defaults() {
        let settings = LineSettings::default();
        assert_eq!(settings, LineModel::new().settings());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_finite_coordinates() {
        let nan_start = LineSettings::default().with_start([f64::NAN, 0.0, 0.0]);
        assert!(matches!(
            nan_start.validate(),
            Err(Error::InvalidConfig(_))
        ));

        let inf_end = LineSettings::default().with_end([0.0, f64::INFINITY, 0.0]);
        assert!(matches!(inf_end.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn degenerate_segment_is_valid() {
        let settings = LineSettings::new([2.0, 2.0, 2.0], [2.0, 2.0, 2.0]);
        let model =
            LineModel::try_from_settings(&settings, Constant::new(1.0).into_shared()).unwrap();
        assert!(model.is_degenerate());
    }

    #[test]
    fn try_from_settings_applies_geometry_and_flag() {
        let settings = LineSettings::new([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]).with_attenuate(false);
        let model =
            LineModel::try_from_settings(&settings, Constant::new(3.0).into_shared()).unwrap();

        assert_eq!(model.start(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(model.end(), DVec3::new(4.0, 5.0, 6.0));
        assert!(!model.attenuate());
        assert_eq!(model.evaluate(0.0).unwrap(), 3.0);
        assert_eq!(model.settings(), settings);
    }

    #[test]
    fn apply_settings_leaves_model_untouched_on_error() {
        let mut model = LineModel::new().with_segment([5.0, 5.0, 5.0], [6.0, 6.0, 6.0]);
        let before = model.settings();

        let bad = LineSettings::default().with_end([f64::NEG_INFINITY, 0.0, 0.0]);
        assert!(model.apply_settings(&bad).is_err());
        assert_eq!(model.settings(), before);
    }
}
