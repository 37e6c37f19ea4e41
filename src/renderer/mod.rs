//! 2D rendering module
//!
//! The scene is drawn through the `Canvas` trait so the simulation never
//! depends on a particular backend (DOM canvas, recorder, ...).

pub mod canvas;
pub mod recorder;
pub mod scene;

pub use canvas::{ArcStroke, Canvas, ColorStop, RadialGradient, Rgba};
pub use recorder::{DrawCommand, DrawList};
pub use scene::{RenderStyle, render};
