//! Animated solar system: eight planets on circular orbits around a
//! glowing sun, per-planet speed sliders and a hover label.

use orrery_engine::*;

use crate::bodies::{PlanetDescriptor, PLANETS};
use crate::hover::{pick_planet, HoverState, PointerState};
use crate::orbit::{update_orbits, Planet};
use crate::presentation::emit_overlay;
use crate::scene::build_scene;
use crate::speed::SpeedControl;

// ── Custom event kinds from the UI ───────────────────────────────────

/// Slider moved: `a` = planet index, `b` = new speed.
pub const CUSTOM_SET_SPEED: u32 = 1;
/// Restore every planet's default speed.
pub const CUSTOM_RESET_SPEEDS: u32 = 2;

/// stars + sun + ground + planets + rings, with headroom.
const MAX_INSTANCES: usize = 640;

pub struct SolarSystem {
    descriptors: &'static [PlanetDescriptor],
    planets: Vec<Planet>,
    speeds: SpeedControl,
    pointer: PointerState,
    hover: Option<HoverState>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_planets(&PLANETS)
    }

    pub fn with_planets(descriptors: &'static [PlanetDescriptor]) -> Self {
        Self {
            descriptors,
            planets: Vec::new(),
            speeds: SpeedControl::new(descriptors.iter().map(|d| (d.name, d.default_speed))),
            pointer: PointerState::new(),
            hover: None,
        }
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn speeds(&self) -> &SpeedControl {
        &self.speeds
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => {
                    self.pointer.move_to(&ctx.viewport, x, y);
                }
                InputEvent::Resize { width, height } => {
                    ctx.resize(width, height);
                }
                InputEvent::Custom { kind, a, b, .. } => match kind {
                    CUSTOM_SET_SPEED => {
                        let name = (a >= 0.0)
                            .then(|| self.descriptors.get(a as usize))
                            .flatten()
                            .map(|d| d.name);
                        match name {
                            Some(name) => {
                                self.speeds.set(name, b as f64);
                            }
                            None => log::debug!("speed: no planet at index {a}"),
                        }
                    }
                    CUSTOM_RESET_SPEEDS => self.speeds.reset(),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: MAX_INSTANCES,
            clear_color: [0.0, 0.0, 0.02],
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.planets = build_scene(ctx, self.descriptors);
        log::info!("solar-system: {} planets", self.planets.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        update_orbits(&mut self.planets, &self.speeds, &mut ctx.scene);

        self.hover = pick_planet(&ctx.camera, &ctx.scene, &self.planets, self.pointer.ndc);

        emit_overlay(ctx, self.hover.as_ref(), &self.planets, &self.speeds);
    }
}
