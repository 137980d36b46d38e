use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
pub mod game;
pub mod hover;
pub mod orbit;
pub mod presentation;
pub mod scene;
pub mod speed;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

// ── Panel helpers ────────────────────────────────────────────────────

/// Display name of the planet at `index`, or an empty string.
#[wasm_bindgen]
pub fn planet_name(index: u32) -> String {
    bodies::planet_name(index as usize).unwrap_or_default().to_string()
}

#[wasm_bindgen]
pub fn planet_count() -> u32 {
    bodies::PLANET_COUNT as u32
}

/// Speed as shown next to a slider.
#[wasm_bindgen]
pub fn format_speed(speed: f64) -> String {
    speed::format_speed(speed)
}

#[wasm_bindgen]
pub fn speed_slider_min() -> f64 {
    speed::SLIDER.min
}

#[wasm_bindgen]
pub fn speed_slider_max() -> f64 {
    speed::SLIDER.max
}

#[wasm_bindgen]
pub fn speed_slider_step() -> f64 {
    speed::SLIDER.step
}
