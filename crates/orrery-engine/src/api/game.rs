use crate::api::types::{EntityId, GameEvent};
use crate::assets::textures::TextureRegistry;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::viewport::Viewport;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial canvas width in CSS pixels (default: 1280).
    pub viewport_width: f32,
    /// Initial canvas height in CSS pixels (default: 720).
    pub viewport_height: f32,
    /// Maximum number of mesh instances (default: 1024).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Background clear color (RGB).
    pub clear_color: [f32; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_instances: 1024,
            max_lights: 4,
            max_events: 32,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene: spawn entities, place the camera, add lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One animation frame. Input events pushed since the previous frame
    /// are visible in `input`.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass after the render buffer is built.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub viewport: Viewport,
    pub lights: LightState,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized for the given configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Camera3D::default();
        camera.set_aspect(config.viewport_width, config.viewport_height);
        Self {
            scene: Scene::with_capacity(config.max_instances),
            camera,
            viewport: Viewport::new(config.viewport_width, config.viewport_height),
            lights: LightState::with_capacity(config.max_lights),
            textures: TextureRegistry::new(),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Resize the viewport and keep the camera aspect in step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.camera.set_aspect(width, height);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional post-build inspection or patching.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub camera: &'a Camera3D,
}
