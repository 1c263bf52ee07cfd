//! Cupola view parallax
//!
//! Maps the pointer position over the cupola to a translate/scale of the
//! background video. Pure math; the host writes the CSS.

use glam::Vec2;

use crate::tuning::Tuning;

/// Transition used while the pointer moves over the cupola
pub const HOVER_TRANSITION: &str = "transform 0.1s ease-out";
/// Transition used to ease back once the pointer leaves
pub const LEAVE_TRANSITION: &str = "transform 0.3s ease-in-out";

/// Screen rectangle of the cupola element (client pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer-follow strength, read from the page's tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Translation (pixels) between the two edges of the cupola
    pub amplitude: f32,
    /// Video scale while hovering
    pub scale: f32,
}

impl Parallax {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            amplitude: tuning.parallax_amplitude,
            scale: tuning.parallax_scale,
        }
    }

    /// Transform for a pointer at `client` over `rect`
    pub fn follow(&self, client: Vec2, rect: ViewRect) -> ParallaxTransform {
        ParallaxTransform::follow(client, rect, self.amplitude, self.scale)
    }
}

/// Video transform to apply
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxTransform {
    pub offset: Vec2,
    pub scale: f32,
    pub transition: &'static str,
}

impl ParallaxTransform {
    /// Resting transform after the pointer leaves
    pub fn rest() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
            transition: LEAVE_TRANSITION,
        }
    }

    /// Transform for a pointer at `client` over `rect`
    pub fn follow(client: Vec2, rect: ViewRect, amplitude: f32, scale: f32) -> Self {
        let fraction = |pos: f32, start: f32, extent: f32| {
            if extent > 0.0 {
                (pos - start) / extent - 0.5
            } else {
                0.0
            }
        };
        Self {
            offset: Vec2::new(
                fraction(client.x, rect.left, rect.width) * amplitude,
                fraction(client.y, rect.top, rect.height) * amplitude,
            ),
            scale,
            transition: HOVER_TRANSITION,
        }
    }

    /// CSS `transform` value
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}
