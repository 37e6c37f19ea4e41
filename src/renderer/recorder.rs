//! Recording canvas
//!
//! Captures draw calls instead of rasterizing them. Used by the native demo
//! runner and by tests that inspect what a frame would draw.

use std::convert::Infallible;

use glam::Vec2;

use super::canvas::{ArcStroke, Canvas, ColorStop, RadialGradient, Rgba};
use crate::sim::SurfaceSize;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(SurfaceSize),
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: Rgba,
    },
    GradientCircle {
        center: Vec2,
        radius: f32,
        inner_center: Vec2,
        inner_radius: f32,
        outer_center: Vec2,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
    Arc(ArcStroke),
    Text {
        text: String,
        pos: Vec2,
        size_px: f32,
        color: Rgba,
    },
}

/// Draw calls for the current frame; `clear` starts a new frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every label drawn this frame
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    type Error = Infallible;

    fn clear(&mut self, size: SurfaceSize) -> Result<(), Infallible> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(size));
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
        });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient<'_>,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::GradientCircle {
            center,
            radius,
            inner_center: gradient.inner_center,
            inner_radius: gradient.inner_radius,
            outer_center: gradient.outer_center,
            outer_radius: gradient.outer_radius,
            stops: gradient.stops.to_vec(),
        });
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Arc(*arc));
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size_px: f32,
        color: Rgba,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size_px,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut list = DrawList::new();
        let size = SurfaceSize::new(300, 260);
        let black = Rgba::new(0, 0, 0, 1.0);

        list.clear(size).unwrap();
        list.fill_ellipse(Vec2::ZERO, Vec2::ONE, black).unwrap();
        list.fill_text("hi", Vec2::ZERO, 12.0, black).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["hi"]);

        list.clear(size).unwrap();
        assert_eq!(list.commands, vec![DrawCommand::Clear(size)]);
    }
}
