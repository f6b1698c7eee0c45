//! WebAssembly bridge for the Under the Hood quiz.
//!
//! The host (TypeScript) drives this surface: it pushes input events,
//! calls `game_tick` once per animation frame, then reads the render
//! instances, sound events, and game events straight out of wasm memory.

mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;
use underhood::input::queue::InputEvent;
use underhood::UnderTheHood;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner<UnderTheHood>>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner<UnderTheHood>) -> R) -> R {
    RUNNER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let runner = slot.as_mut().expect("game_init must be called first");
        f(runner)
    })
}

/// Set up logging, seed the quiz from the clock, and build the runner.
#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    let mut runner = GameRunner::new(UnderTheHood::new(seed));
    runner.init();
    log::info!("under-the-hood initialized (seed {seed})");

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

/// Feed the JSON asset manifest. Safe to skip; the game degrades gracefully.
#[wasm_bindgen]
pub fn game_load_manifest(json: &str) {
    with_runner(|r| r.load_manifest(json));
}

/// Advance the simulation by `dt` seconds and rebuild the frame buffers.
#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// -- Input --

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn game_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

// -- Frame buffer reads --

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const f32 {
    with_runner(|r| r.sound_events_ptr())
}

#[wasm_bindgen]
pub fn get_sound_event_count() -> u32 {
    with_runner(|r| r.sound_event_count())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_event_count() -> u32 {
    with_runner(|r| r.game_event_count())
}

// -- Static configuration --

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_max_sounds() -> u32 {
    with_runner(|r| r.max_sounds())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
