pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::textures::{TextureId, TextureRegistry, TextureRequest, TextureState};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::mesh::{MeshColor, MeshComponent, MeshShape};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::viewport::Viewport;
pub use systems::lighting::{LightState, PointLight};
pub use systems::picking::{pick_nearest, PickHit, Ray};
pub use systems::render::build_render_buffer;
