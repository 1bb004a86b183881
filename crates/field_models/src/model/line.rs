//! Line-segment displacement model.
//!
//! [`LineModel`] returns field values for the one-dimensional coordinate of a point on a
//! line segment, which makes it useful for displacing roads, rivers and other
//! curve-like features. `p = 0.0` is the start of the segment and `p = 1.0` its end.
//!
//! With attenuation enabled the value is scaled by [`attenuation_factor`], which fades
//! to zero at both ends and equals `1.0` at the midpoint. Outside `[0, 1]` that factor
//! turns negative, so extrapolated attenuated values flip sign.
use glam::DVec3;
use tracing::warn;

use crate::error::{Error, Result};
use crate::field::SharedField;

/// Parabolic attenuation weight `4 p (1 - p)`.
///
/// Zero at `p = 0` and `p = 1`, exactly one at `p = 0.5`, negative outside `[0, 1]`.
#[inline]
pub fn attenuation_factor(p: f64) -> f64 {
    p * (1.0 - p) * 4.0
}

/// Samples a field along the segment from `start` to `end`.
#[derive(Clone)]
pub struct LineModel {
    start: DVec3,
    end: DVec3,
    attenuate: bool,
    field: Option<SharedField>,
}

impl Default for LineModel {
    fn default() -> Self {
        Self {
            start: DVec3::ZERO,
            end: DVec3::ONE,
            attenuate: true,
            field: None,
        }
    }
}

impl LineModel {
    /// Creates a model spanning `(0, 0, 0)` to `(1, 1, 1)` with attenuation and no field.
    ///
    /// A field must be set with [`LineModel::set_field`] before evaluating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with the default segment that samples `field`.
    pub fn with_field(field: SharedField) -> Self {
        Self {
            field: Some(field),
            ..Default::default()
        }
    }

    /// Sets both segment endpoints.
    pub fn with_segment(
        mut self,
        start: impl Into<mint::Vector3<f64>>,
        end: impl Into<mint::Vector3<f64>>,
    ) -> Self {
        self.start = DVec3::from(start.into());
        self.end = DVec3::from(end.into());
        self
    }

    /// Sets the attenuation flag.
    pub fn with_attenuate(mut self, attenuate: bool) -> Self {
        self.attenuate = attenuate;
        self
    }

    /// Returns the output value at parameter `p` along the segment.
    ///
    /// `p` is not clamped; values outside `[0, 1]` extrapolate along the line through
    /// the segment. Fails with [`Error::MissingField`] if no field is set.
    pub fn evaluate(&self, p: f64) -> Result<f64> {
        let field = self.field()?;
        let pos = self.position_at(p);
        let value = field.evaluate(pos.x, pos.y, pos.z);

        if self.attenuate {
            Ok(attenuation_factor(p) * value)
        } else {
            Ok(value)
        }
    }

    /// Returns the point at parameter `p` on the line through the segment.
    #[inline]
    pub fn position_at(&self, p: f64) -> DVec3 {
        DVec3::new(
            (self.end.x - self.start.x) * p + self.start.x,
            (self.end.y - self.start.y) * p + self.start.y,
            (self.end.z - self.start.z) * p + self.start.z,
        )
    }

    /// Returns the segment midpoint, where the attenuated output equals the raw field value.
    pub fn midpoint(&self) -> DVec3 {
        self.position_at(0.5)
    }

    /// Returns `true` if start and end coincide.
    ///
    /// A degenerate segment is valid: every query samples the field at that single point.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns the sampled field.
    pub fn field(&self) -> Result<&SharedField> {
        match &self.field {
            Some(field) => Ok(field),
            None => {
                warn!("Line model used without a field.");
                Err(Error::MissingField)
            }
        }
    }

    /// Returns `true` if a field is set.
    pub fn has_field(&self) -> bool {
        self.field.is_some()
    }

    /// Replaces the sampled field.
    pub fn set_field(&mut self, field: SharedField) {
        self.field = Some(field);
    }

    /// Removes and returns the sampled field.
    pub fn take_field(&mut self) -> Option<SharedField> {
        self.field.take()
    }

    pub fn attenuate(&self) -> bool {
        self.attenuate
    }

    /// Sets whether output is moved toward zero as `p` approaches either end.
    pub fn set_attenuate(&mut self, attenuate: bool) {
        self.attenuate = attenuate;
    }

    pub fn set_start_point(&mut self, x: f64, y: f64, z: f64) {
        self.start = DVec3::new(x, y, z);
    }

    pub fn set_end_point(&mut self, x: f64, y: f64, z: f64) {
        self.end = DVec3::new(x, y, z);
    }

    pub fn start(&self) -> DVec3 {
        self.start
    }

    pub fn end(&self) -> DVec3 {
        self.end
    }

    pub fn x0(&self) -> f64 {
        self.start.x
    }

    pub fn y0(&self) -> f64 {
        self.start.y
    }

    pub fn z0(&self) -> f64 {
        self.start.z
    }

    pub fn x1(&self) -> f64 {
        self.end.x
    }

    pub fn y1(&self) -> f64 {
        self.end.y
    }

    pub fn z1(&self) -> f64 {
        self.end.z
    }

    pub fn set_x0(&mut self, x0: f64) {
        self.start.x = x0;
    }

    pub fn set_y0(&mut self, y0: f64) {
        self.start.y = y0;
    }

    pub fn set_z0(&mut self, z0: f64) {
        self.start.z = z0;
    }

    pub fn set_x1(&mut self, x1: f64) {
        self.end.x = x1;
    }

    pub fn set_y1(&mut self, y1: f64) {
        self.end.y = y1;
    }

    pub fn set_z1(&mut self, z1: f64) {
        self.end.z = z1;
    }
}

impl std::fmt::Debug for LineModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineModel")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("attenuate", &self.attenuate)
            .field("has_field", &self.field.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Constant, Field, FnField};

    fn constant_line(value: f64) -> LineModel {
        LineModel::with_field(Constant::new(value).into_shared())
            .with_segment([0.0, 0.0, 0.0], [10.0, 0.0, 0.0])
    }

    #[test]
    fn defaults_match_unit_diagonal() {
        let model = LineModel::new();
        assert_eq!(model.start(), DVec3::ZERO);
        assert_eq!(model.end(), DVec3::ONE);
        assert!(model.attenuate());
        assert!(!model.has_field());
    }

    #[test]
    fn evaluate_without_field_is_an_error() {
        let model = LineModel::new();
        assert_eq!(model.evaluate(0.5), Err(Error::MissingField));
        assert!(matches!(model.field(), Err(Error::MissingField)));
    }

    #[test]
    fn attenuated_constant_line() {
        let model = constant_line(2.0);
        assert_eq!(model.evaluate(0.0).unwrap(), 0.0);
        assert_eq!(model.evaluate(0.5).unwrap(), 2.0);
        assert_eq!(model.evaluate(1.0).unwrap(), 0.0);
        assert_eq!(model.evaluate(0.25).unwrap(), 1.5);
    }

    #[test]
    fn unattenuated_constant_line_extrapolates() {
        let model = constant_line(2.0).with_attenuate(false);
        for p in [-1.0, 0.0, 0.25, 0.5, 1.0, 2.0] {
            assert_eq!(model.evaluate(p).unwrap(), 2.0);
        }
        assert_eq!(model.position_at(2.0), DVec3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn attenuated_extrapolation_flips_sign() {
        let model = constant_line(2.0);
        // factor is -8 at both p = 2 and p = -1
        assert_eq!(model.evaluate(2.0).unwrap(), -16.0);
        assert_eq!(model.evaluate(-1.0).unwrap(), -16.0);
    }

    #[test]
    fn evaluate_samples_field_at_interpolated_position() {
        let field = FnField::new(|p| p.x + 10.0 * p.y + 100.0 * p.z).into_shared();
        let model = LineModel::with_field(field)
            .with_segment([1.0, 2.0, 3.0], [3.0, 6.0, 11.0])
            .with_attenuate(false);

        assert_eq!(model.position_at(0.5), DVec3::new(2.0, 4.0, 7.0));
        assert_eq!(model.evaluate(0.5).unwrap(), 742.0);
        assert_eq!(model.evaluate(0.0).unwrap(), 321.0);
    }

    #[test]
    fn degenerate_segment_samples_single_point() {
        let field = FnField::new(|p| p.x + p.y + p.z).into_shared();
        let mut model = LineModel::with_field(field);
        model.set_start_point(1.0, 1.0, 1.0);
        model.set_end_point(1.0, 1.0, 1.0);
        assert!(model.is_degenerate());

        assert_eq!(model.evaluate(0.5).unwrap(), 3.0);
        assert_eq!(model.evaluate(0.25).unwrap(), 0.75 * 3.0);
        assert_eq!(model.position_at(7.0), DVec3::ONE);
    }

    #[test]
    fn coordinate_accessors_write_through() {
        let mut model = LineModel::new();
        model.set_x0(-1.0);
        model.set_y0(-2.0);
        model.set_z0(-3.0);
        model.set_x1(4.0);
        model.set_y1(5.0);
        model.set_z1(6.0);

        assert_eq!(
            (model.x0(), model.y0(), model.z0()),
            (-1.0, -2.0, -3.0)
        );
        assert_eq!((model.x1(), model.y1(), model.z1()), (4.0, 5.0, 6.0));
        assert_eq!(model.start(), DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(model.end(), DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn set_and_take_field() {
        let mut model = LineModel::new();
        model.set_field(Constant::new(1.0).into_shared());
        assert!(model.has_field());
        assert_eq!(model.field().unwrap().evaluate(0.0, 0.0, 0.0), 1.0);

        let taken = model.take_field();
        assert!(taken.is_some());
        assert_eq!(model.evaluate(0.5), Err(Error::MissingField));
    }

    #[test]
    fn set_attenuate_toggles_output() {
        let mut model = constant_line(2.0);
        model.set_attenuate(false);
        assert!(!model.attenuate());
        assert_eq!(model.evaluate(0.0).unwrap(), 2.0);
        model.set_attenuate(true);
        assert_eq!(model.evaluate(0.0).unwrap(), 0.0);
    }

    #[test]
    fn attenuation_factor_shape() {
        assert_eq!(attenuation_factor(0.0), 0.0);
        assert_eq!(attenuation_factor(1.0), 0.0);
        assert_eq!(attenuation_factor(0.5), 1.0);
        assert_eq!(attenuation_factor(0.25), attenuation_factor(0.75));
        assert!(attenuation_factor(1.5) < 0.0);
    }

    #[test]
    fn midpoint_is_average_of_endpoints() {
        let model = LineModel::new().with_segment([0.0, 2.0, -4.0], [2.0, 4.0, 4.0]);
        assert_eq!(model.midpoint(), DVec3::new(1.0, 3.0, 0.0));
    }
}
