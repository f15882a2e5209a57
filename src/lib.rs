//! dial_ui - a rotary dial input widget decoupled from any UI toolkit
//!
//! The crate models a circular control whose overlay rotation encodes a
//! numeric value inside a configurable range. The host toolkit feeds pointer
//! and scroll events in through the [`Widget`] trait and consumes render
//! hints (overlay rotation, press scale) out through the [`Renderer`] trait.

mod config;
mod constants;
mod dial;
mod error;
mod event;
mod geometry;
mod gesture;
mod renderer;
mod widget;
mod widgets;

pub use config::DialConfig;
pub use dial::DialModel;
pub use error::{DialError, Result};
pub use event::{Event, PointerButton, ScrollDirection};
pub use geometry::{Point, Rectangle, Size};
pub use gesture::{angle_of, GestureTracker};
pub use renderer::{Color, Renderer};
pub use widget::Widget;

// Re-export widgets
pub use widgets::{dial, Dial};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::DialConfig;
    pub use crate::dial::DialModel;
    pub use crate::error::DialError;
    pub use crate::event::{Event, PointerButton, ScrollDirection};
    pub use crate::geometry::{Point, Rectangle, Size};
    pub use crate::gesture::GestureTracker;
    pub use crate::renderer::{Color, Renderer};
    pub use crate::widget::Widget;
    pub use crate::widgets::{dial, Dial};
}
