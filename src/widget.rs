//! Widget trait and related types

use crate::event::Event;
use crate::geometry::Rectangle;
use crate::renderer::Renderer;

/// The seam between a widget and the host toolkit's event and draw loops.
///
/// The host owns layout and passes the widget its bounds with every call.
pub trait Widget<Message> {
    /// Draw the widget into the given bounds.
    fn draw(&self, renderer: &mut dyn Renderer, bounds: Rectangle);

    /// Handle an event, optionally producing a message.
    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> Option<Message> {
        let _ = (event, bounds);
        None
    }
}
