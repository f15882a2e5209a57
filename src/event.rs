use crate::geometry::Point;

/// Events the dial can respond to, as delivered by the host toolkit.
#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer button pressed.
    PointerPressed {
        button: PointerButton,
        position: Point,
    },
    /// Pointer button released.
    PointerReleased {
        button: PointerButton,
        position: Point,
    },
    /// Pointer moved.
    PointerMoved { position: Point },
    /// Scroll wheel tick.
    Scrolled {
        direction: ScrollDirection,
        position: Point,
    },
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Direction of a scroll wheel tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    /// Signed tick magnitude: up and left turn the dial toward `min`.
    pub fn tick(self) -> f32 {
        match self {
            ScrollDirection::Up | ScrollDirection::Left => -1.0,
            ScrollDirection::Down | ScrollDirection::Right => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_signs() {
        assert_eq!(ScrollDirection::Up.tick(), -1.0);
        assert_eq!(ScrollDirection::Left.tick(), -1.0);
        assert_eq!(ScrollDirection::Down.tick(), 1.0);
        assert_eq!(ScrollDirection::Right.tick(), 1.0);
    }
}
