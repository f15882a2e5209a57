//! Centralized constants for dial_ui
//!
//! Model defaults and the gesture math constants live here so the widget,
//! the model and the configuration surface agree on them.

use crate::renderer::Color;

// =============================================================================
// Model defaults
// =============================================================================

/// Default minimum value
pub const DEFAULT_MIN: f32 = 0.0;

/// Default maximum value
pub const DEFAULT_MAX: f32 = 360.0;

/// Default step size
pub const DEFAULT_STEP: f32 = 1.0;

/// Default value
pub const DEFAULT_VALUE: f32 = 0.0;

/// Default press zoom factor
pub const DEFAULT_ZOOM_FACTOR: f32 = 4.0;

// =============================================================================
// Gesture Math
// =============================================================================

/// Angular span that scales the per-step drag threshold: the dead-zone
/// threshold is `(SENSITIVITY_SPAN / max) * step` degrees.
pub const SENSITIVITY_SPAN: f32 = 350.0;

/// Degrees in one full turn of the overlay
pub const FULL_TURN: f32 = 360.0;

// =============================================================================
// Appearance defaults
// =============================================================================

/// Default source name for the static background image
pub const DEFAULT_BACKGROUND_IMAGE: &str = "background.png";

/// Default source name for the rotating overlay image
pub const DEFAULT_OVERLAY_IMAGE: &str = "gear.png";

/// Default tint for the background image
pub const DEFAULT_BACKGROUND_TINT: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

/// Default tint for the rotating overlay image
pub const DEFAULT_FOREGROUND_TINT: Color = Color::rgba(0.5, 0.5, 0.5, 0.5);

// =============================================================================
// Tolerances
// =============================================================================

/// Epsilon for float comparison in tests
pub const FLOAT_EPSILON: f32 = 0.0001;
