//! dial_ui example application
//!
//! Drives a dial with a scripted gesture (press, quarter-turn drag, release,
//! a few scroll ticks) and reports the resulting values and render hints.

use dial_ui::prelude::*;

/// Demo messages
#[derive(Debug, Clone)]
enum Message {
    ValueChanged(f32),
    Pressed,
    Released,
}

/// Renderer that reports draw hints through the logger.
struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn draw_image(&mut self, source: &str, bounds: Rectangle, _tint: Color) {
        log::debug!("background {} in {:?}", source, bounds);
    }

    fn draw_rotated_image(
        &mut self,
        source: &str,
        _bounds: Rectangle,
        degrees: f32,
        scale: f32,
        _tint: Color,
    ) {
        log::debug!(
            "overlay {} rotated {:.1} deg, scale {:.2}",
            source,
            degrees,
            scale
        );
    }
}

fn update(message: Message, dial: &Dial<Message>) {
    match message {
        Message::ValueChanged(value) => log::info!("value: {}", value),
        Message::Pressed => log::info!("pressed, scale target {}", dial.scale()),
        Message::Released => log::info!("released, scale target {}", dial.scale()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = DialConfig::from_json(r#"{"max": 360.0, "step": 1.0, "zoom_factor": 1.1}"#)?;
    let mut dial: Dial<Message> = Dial::from_config(&config)?
        .on_change(Message::ValueChanged)
        .on_press(|| Message::Pressed)
        .on_release(|| Message::Released);

    let bounds = Rectangle::new(0.0, 0.0, 200.0, 200.0);
    let center = bounds.center();
    let radius = 80.0;
    let point_at = |degrees: f32| {
        let radians = degrees.to_radians();
        Point::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    };

    // Press on the right edge, drag a quarter turn in 5-degree increments,
    // release, then turn back three scroll ticks.
    let mut script = vec![Event::PointerPressed {
        button: PointerButton::Primary,
        position: point_at(0.0),
    }];
    for i in 1..=18 {
        script.push(Event::PointerMoved {
            position: point_at(i as f32 * 5.0),
        });
    }
    script.push(Event::PointerReleased {
        button: PointerButton::Primary,
        position: point_at(90.0),
    });
    for _ in 0..3 {
        script.push(Event::Scrolled {
            direction: ScrollDirection::Up,
            position: center,
        });
    }

    let mut renderer = TraceRenderer;
    for event in &script {
        if let Some(message) = dial.on_event(event, bounds) {
            update(message, &dial);
        }
        dial.draw(&mut renderer, bounds);
    }

    println!(
        "final value {} ({} deg)",
        dial.model().value(),
        dial.model().rotation_degrees()
    );
    Ok(())
}
