//! Per-frame scene drawing
//!
//! A frame is a pure function of the ball and the surface size: shadow,
//! shaded ball, rim highlight, and the hint label until the first bounce.

use glam::Vec2;
use std::f32::consts::PI;

use super::canvas::{ArcStroke, Canvas, ColorStop, RadialGradient, Rgba};
use crate::settings::Settings;
use crate::sim::{Ball, SurfaceSize};

/// Colors for scene elements
pub mod colors {
    use super::{ColorStop, Rgba};

    pub const SHADOW: Rgba = Rgba::with_alpha_u8(0, 0, 0, 18);
    pub const HIGHLIGHT: Rgba = Rgba::new(255, 255, 255, 0.65);
    pub const HINT: Rgba = Rgba::with_alpha_u8(11, 61, 46, 115);

    /// Light core to dark rim, lit from the upper-left
    pub const BALL_GRADIENT: [ColorStop; 3] = [
        ColorStop {
            offset: 0.0,
            color: Rgba::new(254, 244, 170, 0.98),
        },
        ColorStop {
            offset: 0.55,
            color: Rgba::new(240, 220, 90, 0.98),
        },
        ColorStop {
            offset: 1.0,
            color: Rgba::new(189, 165, 55, 0.98),
        },
    ];
}

/// Shadow offset to the right of the ball
const SHADOW_OFFSET_X: f32 = 8.0;
/// Shadow drop below the ball centre, in radii
const SHADOW_DROP: f32 = 0.85;
/// Shadow diameters, in radii
const SHADOW_WIDTH: f32 = 1.55;
const SHADOW_HEIGHT: f32 = 0.55;
/// Keep the shadow this far above the bottom edge
const SHADOW_BOTTOM_MARGIN: f32 = 6.0;

/// Light source offset (up-left), in radii
const LIGHT_OFFSET: f32 = 0.35;
const LIGHT_CORE: f32 = 0.2;

const HIGHLIGHT_OFFSET: Vec2 = Vec2::new(-0.12, 0.05);
const HIGHLIGHT_RADIUS: f32 = 0.92;
const HIGHLIGHT_START: f32 = 0.18 * PI;
const HIGHLIGHT_END: f32 = 0.92 * PI;
const HIGHLIGHT_WIDTH: f32 = 3.0;

const HINT_POS: Vec2 = Vec2::new(12.0, 12.0);
const HINT_SIZE: f32 = 12.0;

/// What to draw besides the ball itself
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub show_hint: bool,
    pub hint_text: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl RenderStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            show_hint: settings.show_hint,
            hint_text: settings.hint_text.clone(),
        }
    }
}

/// Draw one frame
pub fn render<C: Canvas>(
    canvas: &mut C,
    ball: &Ball,
    size: SurfaceSize,
    style: &RenderStyle,
) -> Result<(), C::Error> {
    let r = ball.radius;
    let pos = ball.pos;

    canvas.clear(size)?;

    // Shadow stays on-surface even when the ball rests on the floor
    let shadow_y = (pos.y + r * SHADOW_DROP)
        .min(size.height as f32 - SHADOW_BOTTOM_MARGIN)
        .max(r);
    canvas.fill_ellipse(
        Vec2::new(pos.x + SHADOW_OFFSET_X, shadow_y),
        Vec2::new(r * SHADOW_WIDTH, r * SHADOW_HEIGHT) * 0.5,
        colors::SHADOW,
    )?;

    let gradient = RadialGradient {
        inner_center: pos - Vec2::splat(r * LIGHT_OFFSET),
        inner_radius: r * LIGHT_CORE,
        outer_center: pos,
        outer_radius: r,
        stops: &colors::BALL_GRADIENT,
    };
    canvas.fill_circle(pos, r, &gradient)?;

    canvas.stroke_arc(&ArcStroke {
        center: pos + HIGHLIGHT_OFFSET * r,
        radius: r * HIGHLIGHT_RADIUS,
        start: HIGHLIGHT_START,
        end: HIGHLIGHT_END,
        width: HIGHLIGHT_WIDTH,
        color: colors::HIGHLIGHT,
    })?;

    if style.show_hint && !ball.has_bounced {
        canvas.fill_text(&style.hint_text, HINT_POS, HINT_SIZE, colors::HINT)?;
    }

    Ok(())
}
