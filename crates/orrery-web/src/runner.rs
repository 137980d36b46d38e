use std::cell::RefCell;

use orrery_engine::bridge::protocol::{
    HEADER_AMBIENT_B, HEADER_AMBIENT_G, HEADER_AMBIENT_INTENSITY, HEADER_AMBIENT_R,
    HEADER_EVENT_COUNT, HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT,
    HEADER_LIGHT_COUNT, HEADER_MAX_EVENTS, HEADER_MAX_INSTANCES, HEADER_MAX_LIGHTS,
    HEADER_PROTOCOL_VERSION, HEADER_SHADOWS, HEADER_VIEWPORT_HEIGHT, HEADER_VIEWPORT_WIDTH,
    PROTOCOL_VERSION,
};
use orrery_engine::{
    build_render_buffer, AssetManifest, CameraUniform, EngineContext, Game, GameConfig,
    InputEvent, InputQueue, ProtocolLayout, RenderBuffer, RenderContext, TextureId,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
///
/// One `tick` is one animation frame: update, then build the render buffer.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u64,
    header: [f32; HEADER_FLOATS],
    camera: CameraUniform,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let camera = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            layout,
            config,
            initialized: false,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
            camera,
        }
    }

    /// Initialize the game. Call once after construction; later calls are ignored.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("runner: init called twice; ignoring");
            return;
        }
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.finish_frame();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one animation frame: update the game exactly once, then build
    /// the render buffer from the updated scene.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        // Header carries this frame's number; the init snapshot is frame 0.
        self.frame += 1;
        self.finish_frame();
    }

    fn finish_frame(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &self.ctx.textures, &mut self.render_buffer);

        if self.render_buffer.instances.len() > self.layout.max_instances {
            log::warn!(
                "runner: {} instances exceed capacity {}; truncating",
                self.render_buffer.instances.len(),
                self.layout.max_instances
            );
            self.render_buffer.instances.truncate(self.layout.max_instances);
        }
        if self.ctx.events.len() > self.layout.max_events {
            self.ctx.events.truncate(self.layout.max_events);
        }

        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
                camera: &self.ctx.camera,
            };
            self.game.render(&mut render_ctx);
        }

        self.camera = self.ctx.camera.uniform();
        self.write_header();
    }

    fn write_header(&mut self) {
        let ambient = self.ctx.lights.ambient();
        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_MAX_INSTANCES] = self.layout.max_instances as f32;
        h[HEADER_INSTANCE_COUNT] = self.render_buffer.instance_count() as f32;
        h[HEADER_MAX_LIGHTS] = self.layout.max_lights as f32;
        h[HEADER_LIGHT_COUNT] = self.ctx.lights.count().min(self.layout.max_lights) as f32;
        h[HEADER_MAX_EVENTS] = self.layout.max_events as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_VIEWPORT_WIDTH] = self.ctx.viewport.width;
        h[HEADER_VIEWPORT_HEIGHT] = self.ctx.viewport.height;
        h[HEADER_AMBIENT_R] = ambient[0];
        h[HEADER_AMBIENT_G] = ambient[1];
        h[HEADER_AMBIENT_B] = ambient[2];
        h[HEADER_AMBIENT_INTENSITY] = self.ctx.lights.ambient_intensity();
        h[HEADER_SHADOWS] = if self.ctx.lights.shadows_enabled() { 1.0 } else { 0.0 };
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    }

    // ---- Assets ----

    /// Parse and install a texture manifest. A malformed manifest is logged
    /// and the previous one stays in effect.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!("runner: manifest loaded ({} textures)", manifest.textures.len());
                self.ctx.textures.set_manifest(manifest);
            }
            Err(e) => log::error!("runner: failed to parse manifest: {e}"),
        }
    }

    /// Texture requests issued since the last call, as a JSON array of
    /// `{id, name, path}`.
    pub fn texture_requests_json(&mut self) -> String {
        self.ctx.textures.requests_json()
    }

    /// Report the outcome of a host-side image load.
    pub fn texture_loaded(&mut self, id: u32, ok: bool) {
        let id = TextureId(id);
        if ok {
            self.ctx.textures.mark_loaded(id);
        } else {
            self.ctx.textures.mark_failed(id);
        }
    }

    // ---- Pointer accessors for zero-copy reads ----

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera.view_projection.as_ptr() as *const f32
    }

    pub fn camera_matrix(&self) -> [f32; 16] {
        bytemuck::cast(self.camera.view_projection)
    }

    pub fn clear_color(&self) -> [f32; 3] {
        self.config.clear_color
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

/// Storage for the live runner. `export_game!` keeps one in a
/// `thread_local!`; `None` before `game_init` and after `game_shutdown`.
pub type RunnerSlot<G> = RefCell<Option<GameRunner<G>>>;

/// Run `f` against the runner in `slot`, if there is one.
/// Returns whether `f` ran.
pub fn try_with_slot<G: Game>(slot: &RunnerSlot<G>, f: impl FnOnce(&mut GameRunner<G>)) -> bool {
    match slot.borrow_mut().as_mut() {
        Some(runner) => {
            f(runner);
            true
        }
        None => false,
    }
}

/// Drop the runner and everything it owns. Returns whether one was live.
pub fn shutdown_slot<G: Game>(slot: &RunnerSlot<G>) -> bool {
    slot.borrow_mut().take().is_some()
}
