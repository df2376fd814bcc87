//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane bounded by a `Viewport`.
//! Row 0 of the integral plane maps to `y_min`, and column 0 maps to
//! `x_min`.
use num::Complex;

use crate::config::{RenderConfig, Viewport};

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.  For that reason,
/// the origin is not included.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub u32, pub u32);

/// Describes the region of the complex plane being rendered.  The real
/// part runs along the x axis, the imaginary part along the y axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Viewport);

/// Describes the column, row of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub u32, pub u32);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from one to points in
/// the other.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The bounds of the complex cartesian plane.
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper {
    /// Constructor.  The caller guarantees a non-empty integral plane
    /// and a viewport with `min < max` on both axes; `RenderConfig`
    /// enforces both.
    pub fn new(integral_plane: IntegralPlane, complex_plane: ComplexPlane) -> PlaneMapper {
        PlaneMapper {
            integral_plane,
            complex_plane,
        }
    }

    /// Given a pixel on the integral cartesian plane, map it to a
    /// point on the complex cartesian plane by linear interpolation.
    /// Pixel 0 lands exactly on the minimum bound; the maximum bound
    /// would be reached only by the pixel one past the last column
    /// (or row), so the image never touches `x_max` or `y_max`.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let IntegralPlane(width, height) = self.integral_plane;
        let ComplexPlane(view) = self.complex_plane;
        Complex::new(
            (pixel.0 as f64) / (width as f64) * (view.x_max - view.x_min) + view.x_min,
            (pixel.1 as f64) / (height as f64) * (view.y_max - view.y_min) + view.y_min,
        )
    }
}

impl<'a> From<&'a RenderConfig> for PlaneMapper {
    fn from(config: &'a RenderConfig) -> PlaneMapper {
        PlaneMapper::new(
            IntegralPlane(config.width(), config.height()),
            ComplexPlane(config.viewport()),
        )
    }
}
