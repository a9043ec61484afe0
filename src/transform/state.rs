//! TransformState - an element's transform as an immutable value
//!
//! Every operation returns a new state. The matrix is kept in the frame CSS
//! consumes it in: relative to the transform origin. Scale and rotate
//! therefore compose directly (`M' = Op * M`), which in the element's
//! top-left frame is `T(P) * Op * T(-P) * M_abs`; see [`TransformState::absolute_matrix`].

use tracing::debug;

use crate::dom::StyleTarget;
use crate::error::{Error, Result};
use crate::primitives::{Matrix4, Vector3, VectorArgs};

use super::origin::{BoxSize, Origin};

/// New origin for [`TransformState::change_origin`]
#[derive(Debug, Clone, PartialEq)]
pub enum OriginSpec {
    /// `transform-origin` text, e.g. `top left` or `10% 10%`.
    Css(String),
    /// Absolute pixels; missing trailing axes keep the current origin's.
    Point(VectorArgs),
}

impl From<&str> for OriginSpec {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}

impl From<String> for OriginSpec {
    fn from(css: String) -> Self {
        Self::Css(css)
    }
}

impl From<VectorArgs> for OriginSpec {
    fn from(args: VectorArgs) -> Self {
        Self::Point(args)
    }
}

impl From<f64> for OriginSpec {
    fn from(x: f64) -> Self {
        Self::Point(x.into())
    }
}

impl From<(f64, f64)> for OriginSpec {
    fn from(xy: (f64, f64)) -> Self {
        Self::Point(xy.into())
    }
}

impl From<(f64, f64, f64)> for OriginSpec {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self::Point(xyz.into())
    }
}

impl From<[f64; 3]> for OriginSpec {
    fn from(xyz: [f64; 3]) -> Self {
        Self::Point(xyz.into())
    }
}

/// A transform bound to the element it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState<E> {
    element: E,
    size: BoxSize,
    matrix: Matrix4,
    origin: Origin,
    /// Last explicit translate vector; fills omitted trailing arguments.
    last_translate: Vector3,
    /// Last explicit scale vector; fills omitted trailing arguments.
    last_scale: Vector3,
}

impl<E> TransformState<E> {
    pub fn new(element: E, size: BoxSize, matrix: Matrix4, origin: Origin) -> Self {
        Self {
            element,
            size,
            matrix,
            origin,
            last_translate: Vector3::ZERO,
            last_scale: Vector3::ONE,
        }
    }

    pub const fn element(&self) -> &E {
        &self.element
    }

    pub const fn size(&self) -> BoxSize {
        self.size
    }

    /// The matrix relative to the transform origin, as written to `transform`.
    pub const fn matrix(&self) -> Matrix4 {
        self.matrix
    }

    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The same transform expressed relative to the element's top-left corner.
    pub fn absolute_matrix(&self) -> Matrix4 {
        let p = self.origin.point();
        Matrix4::translation(p) * self.matrix * Matrix4::translation(-p)
    }

    /// `matrix3d(...)` for the `transform` property.
    pub fn to_transform_matrix(&self) -> String {
        self.matrix.to_css()
    }

    /// `<x>px <y>px <z>` for the `transform-origin` property.
    pub fn origin_css(&self) -> String {
        self.origin.to_css()
    }
}

impl<E: Clone> TransformState<E> {
    fn with_matrix(&self, matrix: Matrix4) -> Self {
        Self {
            matrix,
            ..self.clone()
        }
    }

    /// Move by `args`. Omitted trailing axes reuse the last explicit translate.
    pub fn translate(&self, args: impl Into<VectorArgs>) -> Result<Self> {
        let v = args.into().resolve(self.last_translate)?;
        Ok(Self {
            last_translate: v,
            ..self.with_matrix(Matrix4::translation(v) * self.matrix)
        })
    }

    /// Replace the translation outright, leaving the linear part alone.
    pub fn set_translate(&self, args: impl Into<VectorArgs>) -> Result<Self> {
        let v = args.into().resolve(self.last_translate)?;
        Ok(Self {
            last_translate: v,
            ..self.with_matrix(self.matrix.with_translation(v))
        })
    }

    /// Scale about the origin. Omitted trailing axes reuse the last explicit scale.
    pub fn scale(&self, args: impl Into<VectorArgs>) -> Result<Self> {
        let v = args.into().resolve(self.last_scale)?;
        Ok(Self {
            last_scale: v,
            ..self.with_matrix(Matrix4::scaling(v) * self.matrix)
        })
    }

    /// Replace the per-axis scale outright, leaving rotation, skew and
    /// translation alone, whichever order they were applied in.
    pub fn set_scale(&self, args: impl Into<VectorArgs>) -> Result<Self> {
        let v = args.into().resolve(self.last_scale)?;
        Ok(Self {
            last_scale: v,
            ..self.with_matrix(self.matrix.with_scale(v))
        })
    }

    /// Rotate `angle` radians about `axis` through the origin.
    ///
    /// The axis always needs three components and the angle must be finite.
    /// A zero axis or zero angle returns an identical state.
    pub fn rotate(&self, axis: impl Into<VectorArgs>, angle: f64) -> Result<Self> {
        let axis = axis.into().require_full()?;
        if !angle.is_finite() {
            return Err(Error::Argument(format!("expected a finite angle, got {angle}")));
        }
        Ok(match Matrix4::rotation(axis, angle) {
            Some(r) => self.with_matrix(r * self.matrix),
            None => self.clone(),
        })
    }

    pub fn rotate_degrees(&self, axis: impl Into<VectorArgs>, degrees: f64) -> Result<Self> {
        self.rotate(axis, degrees.to_radians())
    }

    /// Move the anchor for later operations without changing what is rendered.
    pub fn change_origin(&self, spec: impl Into<OriginSpec>) -> Result<Self> {
        let origin = match spec.into() {
            OriginSpec::Css(css) => Origin::parse(&css, self.size)?,
            OriginSpec::Point(args) => Origin::at(args.resolve(self.origin.point())?),
        };
        let shift = self.origin.point() - origin.point();
        let matrix = Matrix4::translation(shift) * self.matrix * Matrix4::translation(-shift);
        Ok(Self {
            origin,
            ..self.with_matrix(matrix)
        })
    }
}

impl<E: StyleTarget> TransformState<E> {
    /// Write the transform and its origin to the element's style.
    pub fn apply(&self) -> Result<&Self> {
        let transform = self.to_transform_matrix();
        let origin = self.origin_css();
        debug!(%transform, %origin, "applying transform");
        self.element.write_transform(&transform, &origin)?;
        Ok(self)
    }
}
