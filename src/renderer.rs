//! Render-hint boundary between the dial and the host toolkit.

use crate::geometry::Rectangle;

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing surface the host toolkit implements.
///
/// The dial describes itself through these hints; image decoding,
/// compositing and animation timing stay on the toolkit side.
pub trait Renderer {
    /// Draw a static image filling `bounds`, tinted by `tint`.
    fn draw_image(&mut self, source: &str, bounds: Rectangle, tint: Color);

    /// Draw an image rotated by `degrees` around the center of `bounds` and
    /// scaled by `scale`, tinted by `tint`.
    ///
    /// `scale` is the animation target for the press zoom; easing toward it
    /// is owned by the host.
    fn draw_rotated_image(
        &mut self,
        source: &str,
        bounds: Rectangle,
        degrees: f32,
        scale: f32,
        tint: Color,
    );
}
