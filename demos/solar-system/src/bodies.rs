/// Planet table and scene constants.
///
/// Sizes and distances are chosen for readability, not to scale.
/// Default speeds are in radians per rendered frame and fall off with
/// orbit radius.

/// Static description of one planet, consumed by the scene builder.
#[derive(Debug, Clone, Copy)]
pub struct PlanetDescriptor {
    pub name: &'static str,
    /// Texture name, resolved to an image path through the asset manifest.
    pub texture: &'static str,
    /// Sphere radius in world units.
    pub size: f32,
    /// Distance from the sun in world units.
    pub orbit_radius: f64,
    /// Angular speed at startup (radians per frame).
    pub default_speed: f64,
}

pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [PlanetDescriptor; PLANET_COUNT] = [
    PlanetDescriptor { name: "Mercury", texture: "mercury", size: 0.4, orbit_radius: 6.0, default_speed: 0.04 },
    PlanetDescriptor { name: "Venus", texture: "venus", size: 0.9, orbit_radius: 9.0, default_speed: 0.015 },
    PlanetDescriptor { name: "Earth", texture: "earth", size: 1.0, orbit_radius: 12.0, default_speed: 0.01 },
    PlanetDescriptor { name: "Mars", texture: "mars", size: 0.6, orbit_radius: 15.0, default_speed: 0.008 },
    PlanetDescriptor { name: "Jupiter", texture: "jupiter", size: 2.2, orbit_radius: 20.0, default_speed: 0.004 },
    PlanetDescriptor { name: "Saturn", texture: "saturn", size: 1.9, orbit_radius: 26.0, default_speed: 0.003 },
    PlanetDescriptor { name: "Uranus", texture: "uranus", size: 1.4, orbit_radius: 31.0, default_speed: 0.002 },
    PlanetDescriptor { name: "Neptune", texture: "neptune", size: 1.3, orbit_radius: 36.0, default_speed: 0.001 },
];

/// Name of the planet at `index`, if any.
pub fn planet_name(index: usize) -> Option<&'static str> {
    PLANETS.get(index).map(|p| p.name)
}

/// Index of the planet called `name`, if any.
pub fn planet_index(name: &str) -> Option<usize> {
    PLANETS.iter().position(|p| p.name == name)
}

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_TEXTURE: &str = "sun";
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.85, 0.4);
pub const SUN_EMISSIVE: f32 = 1.5;

// ── Orbit rings ──────────────────────────────────────────────────────

/// Half the ring thickness; rings span `orbit_radius ± ORBIT_RING_HALF_WIDTH`.
pub const ORBIT_RING_HALF_WIDTH: f32 = 0.05;
pub const ORBIT_RING_COLOR: (f32, f32, f32) = (0.45, 0.45, 0.5);

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 500;
/// Stars fill a cube of this side length centred on the sun.
pub const STARFIELD_SIDE: f32 = 200.0;
pub const STAR_RADIUS: f32 = 0.1;
pub const STAR_SEED: u64 = 0x5EED_5747;

// ── Ground plane ─────────────────────────────────────────────────────

pub const GROUND_Y: f32 = -4.0;
pub const GROUND_SIZE: f32 = 200.0;
pub const GROUND_COLOR: (f32, f32, f32) = (0.06, 0.06, 0.08);

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const AMBIENT_INTENSITY: f32 = 0.25;
pub const SUN_LIGHT_COLOR: [f32; 3] = [1.0, 0.95, 0.85];
pub const SUN_LIGHT_INTENSITY: f32 = 2.0;
/// Sun light reaches past the outermost orbit.
pub const SUN_LIGHT_RANGE: f32 = 150.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_radii_increase_and_clear_the_sun() {
        let mut prev = SUN_RADIUS as f64;
        for p in &PLANETS {
            assert!(p.orbit_radius - p.size as f64 > prev, "{} overlaps its inner neighbour", p.name);
            prev = p.orbit_radius + p.size as f64;
        }
    }

    #[test]
    fn default_speeds_decrease_outward() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].default_speed > pair[1].default_speed);
            assert!(pair[1].default_speed > 0.0);
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, p) in PLANETS.iter().enumerate() {
            assert_eq!(planet_index(p.name), Some(i));
        }
        assert_eq!(planet_name(2), Some("Earth"));
        assert_eq!(planet_name(PLANET_COUNT), None);
    }
}
