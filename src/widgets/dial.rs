//! A rotary dial widget: turn by dragging in a circle or by scrolling.

use crate::config::DialConfig;
use crate::constants::{
    DEFAULT_BACKGROUND_IMAGE, DEFAULT_BACKGROUND_TINT, DEFAULT_FOREGROUND_TINT,
    DEFAULT_OVERLAY_IMAGE,
};
use crate::dial::DialModel;
use crate::error::Result;
use crate::event::{Event, PointerButton};
use crate::geometry::{Point, Rectangle};
use crate::gesture::GestureTracker;
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;

/// A circular control whose overlay rotation encodes its value.
///
/// The background image stays fixed; the overlay image rotates with the
/// value and scales to `zoom_factor` while pressed. The host animates both
/// transitions; the widget only reports the targets.
pub struct Dial<Message> {
    model: DialModel,
    gesture: Option<GestureTracker>,
    pressed: bool,
    background_image: String,
    overlay_image: String,
    background_color: Color,
    foreground_color: Color,
    on_change: Option<Box<dyn Fn(f32) -> Message>>,
    on_press: Option<Box<dyn Fn() -> Message>>,
    on_release: Option<Box<dyn Fn() -> Message>>,
}

impl<Message> Default for Dial<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> Dial<Message> {
    /// Create a dial with the default model and appearance.
    pub fn new() -> Self {
        Self {
            model: DialModel::new(),
            gesture: None,
            pressed: false,
            background_image: DEFAULT_BACKGROUND_IMAGE.to_string(),
            overlay_image: DEFAULT_OVERLAY_IMAGE.to_string(),
            background_color: DEFAULT_BACKGROUND_TINT,
            foreground_color: DEFAULT_FOREGROUND_TINT,
            on_change: None,
            on_press: None,
            on_release: None,
        }
    }

    /// Create a dial from persisted options.
    pub fn from_config(config: &DialConfig) -> Result<Self> {
        let mut dial = Self::new();
        config.apply(&mut dial.model)?;
        Ok(dial)
    }

    /// Set the value range.
    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.model.set_range(min, max);
        self
    }

    /// Set the step size (0 for continuous).
    pub fn step(mut self, step: f32) -> Result<Self> {
        self.model.set_step(step)?;
        Ok(self)
    }

    /// Set the current value.
    pub fn value(mut self, value: f32) -> Self {
        self.model.set_value(value);
        self
    }

    /// Set the scale the overlay zooms to while pressed.
    pub fn zoom_factor(mut self, zoom_factor: f32) -> Self {
        self.model.set_zoom_factor(zoom_factor);
        self
    }

    /// Set the image drawn behind the rotating overlay.
    pub fn background_image(mut self, source: impl Into<String>) -> Self {
        self.background_image = source.into();
        self
    }

    /// Set the image that rotates with the value.
    pub fn overlay_image(mut self, source: impl Into<String>) -> Self {
        self.overlay_image = source.into();
        self
    }

    /// Set the tint for the background image.
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the tint for the rotating overlay image.
    pub fn foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = color;
        self
    }

    /// Set the callback for value changes.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> Message + 'static,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set the callback for press start.
    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Message + 'static,
    {
        self.on_press = Some(Box::new(f));
        self
    }

    /// Set the callback for release.
    pub fn on_release<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Message + 'static,
    {
        self.on_release = Some(Box::new(f));
        self
    }

    /// Access the underlying model.
    pub fn model(&self) -> &DialModel {
        &self.model
    }

    /// Mutable access to the underlying model.
    pub fn model_mut(&mut self) -> &mut DialModel {
        &mut self.model
    }

    /// Whether a gesture currently owns the dial.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Scale target for the press animation.
    pub fn scale(&self) -> f32 {
        if self.pressed {
            self.model.zoom_factor()
        } else {
            1.0
        }
    }

    fn begin_gesture(&mut self, position: Point, center: Point) {
        self.gesture = Some(GestureTracker::begin(position, center));
    }
}

impl<Message> Widget<Message> for Dial<Message> {
    fn draw(&self, renderer: &mut dyn Renderer, bounds: Rectangle) {
        renderer.draw_image(&self.background_image, bounds, self.background_color);
        renderer.draw_rotated_image(
            &self.overlay_image,
            bounds,
            self.model.rotation_degrees(),
            self.scale(),
            self.foreground_color,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> Option<Message> {
        match event {
            Event::PointerPressed {
                button: PointerButton::Primary,
                position,
            } => {
                if !bounds.contains(*position) {
                    return None;
                }
                self.begin_gesture(*position, bounds.center());
                self.pressed = true;
                self.on_press.as_ref().map(|f| f())
            }
            Event::PointerMoved { position } => {
                // Moves belong to the dial only while a press holds the
                // capture; a scroll baseline alone does not claim them.
                if !self.pressed {
                    return None;
                }
                let center = bounds.center();
                let tracker = self.gesture.as_mut()?;
                let value = tracker.drag(*position, center, &mut self.model)?;
                self.on_change.as_ref().map(|f| f(value))
            }
            Event::Scrolled {
                direction,
                position,
            } => {
                if !bounds.contains(*position) {
                    return None;
                }
                // The tick is applied first, then a fresh angle baseline is
                // recorded for the burst that follows.
                let changed = GestureTracker::scroll(*direction, &mut self.model);
                self.begin_gesture(*position, bounds.center());
                let value = changed?;
                self.on_change.as_ref().map(|f| f(value))
            }
            Event::PointerReleased {
                button: PointerButton::Primary,
                ..
            } => {
                let was_active = self.gesture.take().is_some() || self.pressed;
                if !was_active {
                    return None;
                }
                self.pressed = false;
                self.on_release.as_ref().map(|f| f())
            }
            _ => None,
        }
    }
}

/// Helper function to create a dial.
pub fn dial<Message>() -> Dial<Message> {
    Dial::new()
}
