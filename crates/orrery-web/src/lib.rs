pub mod runner;

pub use runner::{shutdown_slot, try_with_slot, GameRunner, RunnerSlot};

#[doc(hidden)]
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` / `try_with_runner()` helpers
/// - All wasm-bindgen exports (init, per-frame tick, input handlers,
///   texture plumbing, data accessors, shutdown)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log`
/// and `console_error_panic_hook`, and import `InputEvent`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: $crate::RunnerSlot<$game_type> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        /// Like `with_runner`, but a no-op once the runner is gone.
        fn try_with_runner(f: impl FnOnce(&mut $crate::GameRunner<$game_type>)) {
            RUNNER.with(|cell| {
                $crate::try_with_slot(cell, f);
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// Called from the host's animation-frame callback.
        #[wasm_bindgen]
        pub fn game_tick() {
            try_with_runner(|r| r.tick());
        }

        /// Tear down the scene. Later ticks and input calls do nothing.
        #[wasm_bindgen]
        pub fn game_shutdown() {
            if RUNNER.with(|cell| $crate::shutdown_slot(cell)) {
                log::info!("{}: shut down", $game_name);
            }
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            try_with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            try_with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            try_with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Textures ----

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_take_texture_requests() -> String {
            with_runner(|r| r.texture_requests_json())
        }

        #[wasm_bindgen]
        pub fn game_texture_loaded(id: u32, ok: bool) {
            try_with_runner(|r| r.texture_loaded(id, ok));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_matrix() -> $crate::js_sys::Float32Array {
            let m = with_runner(|r| r.camera_matrix());
            $crate::js_sys::Float32Array::from(&m[..])
        }

        #[wasm_bindgen]
        pub fn get_clear_color() -> $crate::js_sys::Float32Array {
            let c = with_runner(|r| r.clear_color());
            $crate::js_sys::Float32Array::from(&c[..])
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
