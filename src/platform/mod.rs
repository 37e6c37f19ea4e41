//! Platform abstraction layer
//!
//! Handles the host side of the animation:
//! - Surface sizing from the container's measured width
//! - Device pixel density
//! - Mounting a DOM canvas (web only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use thiserror::Error;

use crate::settings::Settings;
use crate::sim::SurfaceSize;

/// Surface size for a container of the given rendered width.
///
/// The width is floored and never smaller than `settings.min_width`; the
/// height is always `settings.base_height`.
pub fn surface_size(client_width: f64, settings: &Settings) -> SurfaceSize {
    // f64::max drops NaN
    let measured = client_width.max(0.0).floor() as u32;
    SurfaceSize::new(measured.max(settings.min_width), settings.base_height)
}

/// Backing-store scale for a device pixel ratio, capped at `max`
pub fn pixel_density(device_ratio: f64, max: f64) -> f64 {
    let ratio = if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio
    } else {
        1.0
    };
    ratio.min(max)
}

/// Reasons the animation cannot start on this page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    /// No element with this id
    #[error("container #{0} not found")]
    ContainerMissing(String),
    /// The browser refused a 2D canvas context
    #[error("2D canvas context unavailable")]
    ContextUnavailable,
    /// Any other JS exception, stringified
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_floors_width() {
        let settings = Settings::default();
        assert_eq!(surface_size(640.7, &settings), SurfaceSize::new(640, 260));
    }

    #[test]
    fn test_surface_size_minimum_width() {
        let settings = Settings::default();
        assert_eq!(surface_size(100.0, &settings), SurfaceSize::new(240, 260));
        assert_eq!(surface_size(0.0, &settings), SurfaceSize::new(240, 260));
        assert_eq!(surface_size(-50.0, &settings), SurfaceSize::new(240, 260));
        assert_eq!(surface_size(f64::NAN, &settings), SurfaceSize::new(240, 260));
    }

    #[test]
    fn test_surface_size_uses_settings() {
        let settings = Settings {
            min_width: 100,
            base_height: 180,
            ..Default::default()
        };
        assert_eq!(surface_size(150.0, &settings), SurfaceSize::new(150, 180));
    }

    #[test]
    fn test_pixel_density() {
        assert_eq!(pixel_density(1.0, 2.0), 1.0);
        assert_eq!(pixel_density(1.5, 2.0), 1.5);
        assert_eq!(pixel_density(3.0, 2.0), 2.0);
        assert_eq!(pixel_density(0.0, 2.0), 1.0);
        assert_eq!(pixel_density(f64::NAN, 2.0), 1.0);
    }

    #[test]
    fn test_host_error_messages() {
        assert_eq!(
            HostError::ContainerMissing("ball-container".into()).to_string(),
            "container #ball-container not found"
        );
        assert_eq!(
            HostError::ContextUnavailable.to_string(),
            "2D canvas context unavailable"
        );
    }

    #[test]
    fn test_host_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HostError::Js("boom".into()));
        assert_eq!(err.to_string(), "javascript error: boom");
        assert!(err.source().is_none());
    }
}
