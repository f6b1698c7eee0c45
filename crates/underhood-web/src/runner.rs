//! Frame loop driver. Owns the game, its engine context, and the buffers
//! the host reads after each tick.

use underhood::api::game::{EngineContext, Game, GameConfig, RenderContext};
use underhood::bridge::protocol::ProtocolLayout;
use underhood::core::time::FixedTimestep;
use underhood::input::queue::{InputEvent, InputQueue};
use underhood::renderer::instance::RenderBuffer;
use underhood::systems::render::build_render_buffer;

pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    /// Sound events of the last simulated frame, as f32 ids for the host.
    sound_scratch: Vec<f32>,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let timestep = FixedTimestep::new(config.fixed_dt);
        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            config,
            layout,
            sound_scratch: Vec::new(),
            initialized: false,
        }
    }

    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    pub fn load_manifest(&mut self, json: &str) {
        self.game.load_manifest(json);
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance the simulation by `frame_dt` seconds and rebuild the render
    /// buffer. Input is consumed after the first step of a frame so a
    /// catch-up burst can never replay the same click.
    pub fn tick(&mut self, frame_dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.input.drain();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.render_buffer
            .instances
            .truncate(self.layout.max_instances);
        self.game.render(&mut RenderContext {
            render_buffer: &mut self.render_buffer,
        });

        self.ctx.sounds.truncate(self.layout.max_sounds);
        self.ctx.events.truncate(self.layout.max_events);
        self.sound_scratch.clear();
        self.sound_scratch
            .extend(self.ctx.sounds.iter().map(|s| s.0 as f32));
    }

    // -- Host-facing buffer accessors --

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const f32 {
        self.sound_scratch.as_ptr()
    }

    pub fn sound_event_count(&self) -> u32 {
        self.sound_scratch.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_sounds(&self) -> u32 {
        self.layout.max_sounds as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn game(&self) -> &G {
        &self.game
    }
}
