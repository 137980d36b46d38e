/// Buffer layout shared with the TypeScript renderer.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 15 floats]
/// [Mesh instances: max_instances × 20 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// [Camera: 16 floats (view-projection, column-major)]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;
use crate::systems::lighting::PointLight;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 15;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_INSTANCES: usize = 1;
pub const HEADER_INSTANCE_COUNT: usize = 2;
pub const HEADER_MAX_LIGHTS: usize = 3;
pub const HEADER_LIGHT_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_AMBIENT_R: usize = 9;
pub const HEADER_AMBIENT_G: usize = 10;
pub const HEADER_AMBIENT_B: usize = 11;
pub const HEADER_AMBIENT_INTENSITY: usize = 12;
pub const HEADER_SHADOWS: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

pub const INSTANCE_FLOATS: usize = MeshInstance::FLOATS;
pub const LIGHT_FLOATS: usize = PointLight::FLOATS;
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_lights: usize,
    pub max_events: usize,

    pub instance_data_floats: usize,
    pub light_data_floats: usize,
    pub event_data_floats: usize,

    pub instance_data_offset: usize,
    pub light_data_offset: usize,
    pub event_data_offset: usize,
    pub camera_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_lights: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let light_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;
        let camera_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = camera_data_offset + CAMERA_FLOATS;

        Self {
            max_instances,
            max_lights,
            max_events,
            instance_data_floats,
            light_data_floats,
            event_data_floats,
            instance_data_offset,
            light_data_offset,
            event_data_offset,
            camera_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_lights, config.max_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_layout() {
        let layout = ProtocolLayout::from_config(&GameConfig::default());
        let config = GameConfig::default();
        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.instance_data_floats, config.max_instances * 20);
        assert_eq!(layout.light_data_floats, config.max_lights * 8);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(600, 4, 16);
        let expected_total = HEADER_FLOATS + 600 * 20 + 4 * 8 + 16 * 4 + 16;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 2, 20);
        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.light_data_offset, layout.instance_data_offset + layout.instance_data_floats);
        assert_eq!(layout.event_data_offset, layout.light_data_offset + layout.light_data_floats);
        assert_eq!(layout.camera_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.camera_data_offset + CAMERA_FLOATS);
    }
}
