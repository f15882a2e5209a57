//! Translates pointer drags and scroll ticks into dial value changes.

use crate::constants::SENSITIVITY_SPAN;
use crate::dial::DialModel;
use crate::event::ScrollDirection;
use crate::geometry::Point;

/// Angle from `center` to `position` in degrees, in `(-180, 180]`.
pub fn angle_of(position: Point, center: Point) -> f32 {
    (position.y - center.y)
        .atan2(position.x - center.x)
        .to_degrees()
}

/// Per-interaction state for one continuous drag or scroll burst.
///
/// Created when a gesture starts and dropped when it ends; a gesture start
/// while another is live simply replaces the tracker.
#[derive(Debug, Clone, Copy)]
pub struct GestureTracker {
    origin_angle: f32,
    previous_angle: f32,
}

impl GestureTracker {
    /// Record the angle baseline for a gesture starting at `position`.
    pub fn begin(position: Point, center: Point) -> Self {
        let angle = angle_of(position, center);
        Self {
            origin_angle: angle,
            previous_angle: angle,
        }
    }

    /// Angle recorded at gesture start.
    pub fn origin_angle(&self) -> f32 {
        self.origin_angle
    }

    /// Angle at the last move that cleared the dead zone.
    pub fn previous_angle(&self) -> f32 {
        self.previous_angle
    }

    /// Feed a drag position.
    ///
    /// Returns the new value when the move cleared the dead zone; moves
    /// inside the dead zone leave the model and `previous_angle` untouched.
    pub fn drag(&mut self, position: Point, center: Point, dial: &mut DialModel) -> Option<f32> {
        let mut angle = angle_of(position, center);
        // Negative angles fold to their absolute value; the folded angle is
        // also what previous_angle keeps for the next delta.
        let difference = if angle < 0.0 {
            angle = angle.abs();
            -(angle - self.previous_angle)
        } else {
            angle - self.previous_angle
        };
        let value = apply_difference(difference, dial)?;
        self.previous_angle = angle;
        Some(value)
    }

    /// Feed a scroll tick.
    ///
    /// The tick has fixed magnitude 1 and goes through the same dead-zone
    /// comparison as a drag, so a tick only passes when the threshold is at
    /// most 1.
    pub fn scroll(direction: ScrollDirection, dial: &mut DialModel) -> Option<f32> {
        apply_difference(direction.tick(), dial)
    }
}

/// Dead-zone threshold: one threshold's worth of angular motion moves the
/// value by one unit.
fn step_threshold(dial: &DialModel) -> f32 {
    (SENSITIVITY_SPAN / dial.max()) * dial.step()
}

fn apply_difference(difference: f32, dial: &mut DialModel) -> Option<f32> {
    // A zero delta has nothing to apply and would divide 0/0 below when the
    // threshold is zero in continuous mode.
    if difference == 0.0 {
        return None;
    }
    let threshold = step_threshold(dial);
    // Negated >= so that a NaN threshold (degenerate max == 0, step == 0
    // configuration) also lands in the ignore path.
    if !(difference.abs() >= threshold) {
        return None;
    }
    let next = dial.value() + difference / threshold;
    dial.set_value(next);
    Some(dial.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(max: f32, step: f32) -> DialModel {
        let mut dial = DialModel::with_range(0.0, max);
        dial.set_step(step).unwrap();
        dial
    }

    fn on_circle(degrees: f32, center: Point, radius: f32) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    }

    #[test]
    fn test_angle_of_quadrants() {
        let center = Point::new(50.0, 50.0);
        assert!((angle_of(Point::new(60.0, 50.0), center)).abs() < 1e-3);
        assert!((angle_of(Point::new(50.0, 60.0), center) - 90.0).abs() < 1e-3);
        assert!((angle_of(Point::new(40.0, 50.0), center) - 180.0).abs() < 1e-3);
        assert!((angle_of(Point::new(50.0, 40.0), center) + 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_begin_records_baseline() {
        let center = Point::zero();
        let tracker = GestureTracker::begin(Point::new(0.0, 10.0), center);
        assert!((tracker.origin_angle() - 90.0).abs() < 1e-3);
        assert_eq!(tracker.origin_angle(), tracker.previous_angle());
    }

    #[test]
    fn test_small_motion_stays_in_dead_zone() {
        // threshold = 350/360 ≈ 0.972 degrees
        let mut dial = model(360.0, 1.0);
        dial.set_value(100.0);
        let center = Point::zero();
        let mut tracker = GestureTracker::begin(on_circle(0.0, center, 100.0), center);
        let before = tracker.previous_angle();

        assert!(tracker
            .drag(on_circle(0.5, center, 100.0), center, &mut dial)
            .is_none());
        assert_eq!(dial.value(), 100.0);
        assert_eq!(tracker.previous_angle(), before);
    }

    #[test]
    fn test_drag_past_threshold_moves_value() {
        let mut dial = model(360.0, 1.0);
        dial.set_value(100.0);
        let center = Point::zero();
        let mut tracker = GestureTracker::begin(on_circle(0.0, center, 100.0), center);

        let value = tracker
            .drag(on_circle(10.0, center, 100.0), center, &mut dial)
            .unwrap();
        let threshold = 350.0 / 360.0;
        assert!((value - (100.0 + 10.0 / threshold)).abs() < 1e-2);
        assert!((tracker.previous_angle() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_counter_clockwise_drag_decreases_value() {
        let mut dial = model(360.0, 1.0);
        dial.set_value(100.0);
        let center = Point::zero();
        let mut tracker = GestureTracker::begin(on_circle(40.0, center, 100.0), center);

        let value = tracker
            .drag(on_circle(30.0, center, 100.0), center, &mut dial)
            .unwrap();
        assert!(value < 100.0);
    }

    #[test]
    fn test_negative_angles_fold() {
        let mut dial = model(360.0, 1.0);
        dial.set_value(100.0);
        let center = Point::zero();
        // start below the x axis at -30 degrees; begin does not fold
        let mut tracker = GestureTracker::begin(on_circle(-30.0, center, 100.0), center);
        assert!((tracker.previous_angle() + 30.0).abs() < 1e-3);

        // move to -20 degrees: folded angle 20, difference = -(20 - (-30))
        let value = tracker
            .drag(on_circle(-20.0, center, 100.0), center, &mut dial)
            .unwrap();
        let threshold = 350.0 / 360.0;
        assert!((value - (100.0 - 50.0 / threshold)).abs() < 1e-2);
        // previous_angle now holds the folded angle
        assert!((tracker.previous_angle() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_tick_magnitude() {
        let mut dial = model(360.0, 1.0);
        dial.set_value(100.0);
        let value = GestureTracker::scroll(ScrollDirection::Up, &mut dial).unwrap();
        // one tick moves the value by 1/threshold = 360/350
        assert!((value - (100.0 - 360.0 / 350.0)).abs() < 1e-3);

        let value = GestureTracker::scroll(ScrollDirection::Down, &mut dial).unwrap();
        assert!((value - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_swallowed_when_threshold_above_one() {
        // max=100, step=1 -> threshold 3.5, a unit tick never clears it
        let mut dial = model(100.0, 1.0);
        dial.set_value(50.0);
        assert!(GestureTracker::scroll(ScrollDirection::Up, &mut dial).is_none());
        assert_eq!(dial.value(), 50.0);
    }

    #[test]
    fn test_scroll_never_escapes_bounds() {
        let mut dial = model(360.0, 1.0);
        dial.set_value(0.0);
        for _ in 0..10 {
            GestureTracker::scroll(ScrollDirection::Up, &mut dial);
        }
        assert_eq!(dial.value(), 0.0);

        dial.set_value(360.0);
        for _ in 0..10 {
            GestureTracker::scroll(ScrollDirection::Down, &mut dial);
        }
        assert_eq!(dial.value(), 360.0);
    }

    #[test]
    fn test_left_and_right_ticks() {
        let mut dial = model(360.0, 1.0);
        dial.set_value(100.0);
        let down = GestureTracker::scroll(ScrollDirection::Left, &mut dial).unwrap();
        assert!(down < 100.0);
        let up = GestureTracker::scroll(ScrollDirection::Right, &mut dial).unwrap();
        assert!(up > down);
    }
}
