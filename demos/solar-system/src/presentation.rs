//! What the UI overlay shows: the hover label and the per-frame events
//! the host reads to draw it and the speed panel.

use glam::Vec2;
use orrery_engine::{EngineContext, GameEvent, Viewport};

use crate::hover::HoverState;
use crate::orbit::Planet;
use crate::speed::SpeedControl;

/// Hover label: `a` = planet index or -1, `b`/`c` = label pixel position.
pub const EVENT_HOVER: f32 = 1.0;
/// Speed panel row: `a` = planet index, `b` = current speed.
pub const EVENT_SPEED: f32 = 2.0;

/// Label sits just below and to the right of the pointer.
pub const LABEL_OFFSET: Vec2 = Vec2::new(12.0, 12.0);

#[derive(Debug, Clone, PartialEq)]
pub struct HoverLabel {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Place the label for the current hover, if any.
pub fn hover_label(hover: Option<&HoverState>, viewport: &Viewport) -> Option<HoverLabel> {
    let hover = hover?;
    let px = viewport.ndc_to_pixels(hover.ndc) + LABEL_OFFSET;
    Some(HoverLabel {
        name: hover.name.clone(),
        x: px.x,
        y: px.y,
    })
}

/// Queue this frame's overlay events: one hover event, then one speed
/// event per planet in panel order.
pub fn emit_overlay(ctx: &mut EngineContext, hover: Option<&HoverState>, planets: &[Planet], speeds: &SpeedControl) {
    let label = hover_label(hover, &ctx.viewport);
    let event = match label {
        Some(label) => {
            let index = planets
                .iter()
                .position(|p| p.name == label.name)
                .map_or(-1.0, |i| i as f32);
            GameEvent::new(EVENT_HOVER, index, label.x, label.y)
        }
        None => GameEvent::new(EVENT_HOVER, -1.0, 0.0, 0.0),
    };
    ctx.emit_event(event);

    for (i, planet) in planets.iter().enumerate() {
        let speed = speeds.speed_or_default(&planet.name);
        ctx.emit_event(GameEvent::new(EVENT_SPEED, i as f32, speed as f32, 0.0));
    }
}
