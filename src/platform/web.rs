//! DOM canvas host
//!
//! Mounts a `<canvas>` inside the container element, keeps its backing store
//! scaled for the device pixel ratio, and draws through the 2D context.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::{HostError, pixel_density, surface_size};
use crate::renderer::{ArcStroke, Canvas, RadialGradient, Rgba};
use crate::settings::Settings;
use crate::sim::SurfaceSize;

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Look up the container element by id
pub fn find_container(id: &str) -> Result<Element, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::ContainerMissing(id.to_string()))
}

/// Canvas mounted in a container element
pub struct WebSurface {
    container: Element,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    density: f64,
    size: SurfaceSize,
}

impl WebSurface {
    /// Create the canvas inside `container`, sized to the container's width
    pub fn mount(container: Element, settings: &Settings) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| HostError::ContextUnavailable)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(HostError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| HostError::ContextUnavailable)?;

        let density = pixel_density(window.device_pixel_ratio(), settings.max_pixel_density);
        canvas.style().set_property("display", "block")?;
        container.append_child(&canvas)?;

        let size = surface_size(container.client_width() as f64, settings);
        let mut surface = Self {
            container,
            canvas,
            ctx,
            density,
            size,
        };
        surface.resize(size)?;
        log::info!(
            "Mounted {}x{} canvas (pixel density {})",
            size.width,
            size.height,
            density
        );
        Ok(surface)
    }

    /// Current surface size for the container's rendered width
    pub fn measure(&self, settings: &Settings) -> SurfaceSize {
        surface_size(self.container.client_width() as f64, settings)
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Resize the backing store and CSS box; resets the density transform
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), HostError> {
        self.canvas
            .set_width((size.width as f64 * self.density).round() as u32);
        self.canvas
            .set_height((size.height as f64 * self.density).round() as u32);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", size.width))?;
        style.set_property("height", &format!("{}px", size.height))?;

        // Setting width/height wipes the context state
        self.ctx
            .set_transform(self.density, 0.0, 0.0, self.density, 0.0, 0.0)?;
        self.size = size;
        Ok(())
    }
}

impl Canvas for WebSurface {
    type Error = HostError;

    fn clear(&mut self, size: SurfaceSize) -> Result<(), HostError> {
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Rgba) -> Result<(), HostError> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            0.0,
            0.0,
            TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient<'_>,
    ) -> Result<(), HostError> {
        let fill = self.ctx.create_radial_gradient(
            gradient.inner_center.x as f64,
            gradient.inner_center.y as f64,
            gradient.inner_radius as f64,
            gradient.outer_center.x as f64,
            gradient.outer_center.y as f64,
            gradient.outer_radius as f64,
        )?;
        for stop in gradient.stops {
            fill.add_color_stop(stop.offset, &stop.color.to_css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&fill);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_arc(&mut self, arc: &ArcStroke) -> Result<(), HostError> {
        self.ctx.set_stroke_style_str(&arc.color.to_css());
        self.ctx.set_line_width(arc.width as f64);
        self.ctx.begin_path();
        self.ctx.arc(
            arc.center.x as f64,
            arc.center.y as f64,
            arc.radius as f64,
            arc.start as f64,
            arc.end as f64,
        )?;
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        size_px: f32,
        color: Rgba,
    ) -> Result<(), HostError> {
        self.ctx.set_font(&format!("{}px sans-serif", size_px));
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
        Ok(())
    }
}
