//! Drawing surface abstraction
//!
//! The handful of 2D primitives the scene needs. Coordinates are CSS pixels
//! with the origin at the top-left and y pointing down; angles are radians
//! measured clockwise from +x, as on an HTML canvas.

use glam::Vec2;

use crate::sim::SurfaceSize;

/// 8-bit color with a float alpha in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color with an 8-bit alpha (0-255)
    pub const fn with_alpha_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r, g, b, a as f32 / 255.0)
    }

    /// CSS `rgba()` string
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A gradient color stop; `offset` is in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Two-circle radial gradient (canvas `createRadialGradient` semantics)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient<'a> {
    pub inner_center: Vec2,
    pub inner_radius: f32,
    pub outer_center: Vec2,
    pub outer_radius: f32,
    pub stops: &'a [ColorStop],
}

/// Stroked circular arc, drawn clockwise from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub center: Vec2,
    pub radius: f32,
    pub start: f32,
    pub end: f32,
    pub width: f32,
    pub color: Rgba,
}

/// A 2D drawing surface
pub trait Canvas {
    type Error;

    /// Erase the whole surface to transparent
    fn clear(&mut self, size: SurfaceSize) -> Result<(), Self::Error>;

    /// Axis-aligned filled ellipse; `radii` are the half-width and half-height
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) -> Result<(), Self::Error>;

    /// Filled circle painted with a radial gradient
    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient<'_>,
    ) -> Result<(), Self::Error>;

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<(), Self::Error>;

    /// Single line of text anchored at its top-left corner
    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size_px: f32,
        color: Rgba,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(Rgba::new(255, 255, 255, 0.65).to_css(), "rgba(255, 255, 255, 0.65)");
        assert_eq!(Rgba::new(0, 0, 0, 1.0).to_css(), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_u8_alpha() {
        let c = Rgba::with_alpha_u8(0, 0, 0, 255);
        assert_eq!(c.a, 1.0);
        let c = Rgba::with_alpha_u8(11, 61, 46, 115);
        assert!((c.a - 115.0 / 255.0).abs() < 1e-6);
    }
}
