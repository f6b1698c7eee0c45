//! The Under the Hood quiz game — wires the session, hit-testing, and
//! overlays together and rebuilds the scene from state every tick.

use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{GameEvent, SoundEvent};
use crate::assets::manifest::AssetManifest;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::visual::{Palette, Visual};
use crate::input::queue::{InputEvent, InputQueue};
use crate::quiz::hit_test;
use crate::quiz::overlay::{PopupTimer, Tooltip};
use crate::quiz::region::{RegionId, RegionRegistry};
use crate::quiz::session::{FeedbackKind, GameState, QuizSession};
use crate::systems::text::{build_text_entities, text_width, FontConfig};
use glam::Vec2;
use std::collections::HashMap;

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;
/// Top edge of the content area; the illustration is centered horizontally.
pub const CONTENT_Y: f32 = 80.0;

pub const KEY_ESCAPE: u32 = 27;
pub const KEY_R: u32 = 82;

/// Custom input event kind the host sends for its "play again" button.
pub const CUSTOM_RESTART: u32 = 1;

/// Game event kinds forwarded to the host.
pub const EVENT_SCORE: f32 = 1.0;
pub const EVENT_STATE: f32 = 2.0;
pub const EVENT_QUIT: f32 = 3.0;

const SOUND_CORRECT: &str = "correct";
const SOUND_WRONG: &str = "wrong";
const SOUND_WIN: &str = "win";
const SOUND_LOSE: &str = "lose";

fn state_code(state: GameState) -> f32 {
    match state {
        GameState::Playing => 0.0,
        GameState::Won => 1.0,
        GameState::Lost => 2.0,
    }
}

/// Educational car-engine quiz: click the component the prompt names.
pub struct UnderTheHood {
    registry: RegionRegistry,
    session: QuizSession,
    popup: PopupTimer,
    cursor: Option<Vec2>,
    hovered: Option<RegionId>,
    tooltip: Option<Tooltip>,
    /// Sound name -> host event id, from the manifest. Empty = silent.
    sounds: HashMap<String, u32>,
    font: FontConfig,
}

impl UnderTheHood {
    pub fn new(seed: u64) -> Self {
        let registry = RegionRegistry::new();
        let session = QuizSession::new(registry.ids(), seed);
        Self {
            registry,
            session,
            popup: PopupTimer::new(),
            cursor: None,
            hovered: None,
            tooltip: None,
            sounds: HashMap::new(),
            font: FontConfig::default(),
        }
    }

    /// Screen position of the content area's top-left corner.
    pub fn content_origin(&self) -> Vec2 {
        let content = self.registry.content_size();
        Vec2::new((WORLD_WIDTH - content.x) / 2.0, CONTENT_Y)
    }

    fn screen_to_content(&self, p: Vec2) -> Vec2 {
        p - self.content_origin()
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn popup(&self) -> &PopupTimer {
        &self.popup
    }

    pub fn hovered(&self) -> Option<RegionId> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    fn play_sound(&self, ctx: &mut EngineContext, name: &str) {
        // no entry = no audio loaded; stay silent
        if let Some(&id) = self.sounds.get(name) {
            ctx.emit_sound(SoundEvent(id));
        }
    }

    fn emit_score(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent::new(
            EVENT_SCORE,
            self.session.correct() as f32,
            self.session.answered() as f32,
            0.0,
        ));
    }

    fn handle_click(&mut self, ctx: &mut EngineContext, screen: Vec2) {
        self.cursor = Some(screen);
        if self.session.state() != GameState::Playing {
            return;
        }
        let point = self.screen_to_content(screen);
        let Some(clicked) = hit_test::resolve(&self.registry, point) else {
            return;
        };
        let Some(outcome) = self.session.submit_answer(clicked) else {
            return;
        };

        self.popup.arm(outcome.region, outcome.correct);
        self.play_sound(
            ctx,
            if outcome.correct {
                SOUND_CORRECT
            } else {
                SOUND_WRONG
            },
        );
        self.emit_score(ctx);

        let state = self.session.state();
        if state != GameState::Playing {
            self.play_sound(ctx, if state == GameState::Won { SOUND_WIN } else { SOUND_LOSE });
            ctx.emit_event(GameEvent::new(EVENT_STATE, state_code(state), 0.0, 0.0));
        }
    }

    fn try_restart(&mut self, ctx: &mut EngineContext) {
        if !self.session.restart() {
            return;
        }
        self.popup.clear();
        self.hovered = None;
        self.tooltip = None;
        self.emit_score(ctx);
        ctx.emit_event(GameEvent::new(EVENT_STATE, state_code(GameState::Playing), 0.0, 0.0));
        log::info!("round restarted");
    }

    // -- Scene construction --

    fn spawn_text(
        &self,
        ctx: &mut EngineContext,
        text: &str,
        top_left: Vec2,
        size: f32,
        color: Palette,
        layer: RenderLayer,
        tag: &str,
    ) {
        let entities = build_text_entities(
            text,
            top_left,
            size,
            color,
            layer,
            &self.font,
            tag,
            &mut || ctx.next_id(),
        );
        for entity in entities {
            ctx.scene.spawn(entity);
        }
    }

    fn spawn_text_centered(
        &self,
        ctx: &mut EngineContext,
        text: &str,
        center_x: f32,
        top_y: f32,
        size: f32,
        color: Palette,
        layer: RenderLayer,
        tag: &str,
    ) {
        let w = text_width(text, size, &self.font);
        self.spawn_text(
            ctx,
            text,
            Vec2::new(center_x - w / 2.0, top_y),
            size,
            color,
            layer,
            tag,
        );
    }

    fn sync_entities(&self, ctx: &mut EngineContext) {
        ctx.scene.clear();

        // backdrop
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("background")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0))
                .with_size(Vec2::new(WORLD_WIDTH, WORLD_HEIGHT))
                .with_layer(RenderLayer::Background)
                .with_visual(Visual::Fill {
                    color: Palette::White,
                    alpha: 1.0,
                }),
        );

        self.spawn_text_centered(
            ctx,
            "Under the Hood Challenge",
            WORLD_WIDTH / 2.0,
            20.0,
            36.0,
            Palette::Black,
            RenderLayer::Ui,
            "title",
        );

        // illustration, or a gray panel when the artwork never loaded
        let origin = self.content_origin();
        let content = self.registry.content_size();
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("artwork")
                .with_pos(origin + content / 2.0)
                .with_size(content)
                .with_layer(RenderLayer::Artwork)
                .with_visual(if self.registry.artwork_loaded() {
                    Visual::Artwork
                } else {
                    Visual::Fill {
                        color: Palette::Gray,
                        alpha: 1.0,
                    }
                }),
        );

        self.spawn_region_markers(ctx, origin);
        self.spawn_hud(ctx);
        self.spawn_popup(ctx, origin);
        self.spawn_tooltip(ctx, origin);
        self.spawn_verdict(ctx);
    }

    fn spawn_region_markers(&self, ctx: &mut EngineContext, origin: Vec2) {
        for region in self.registry.iter() {
            let b = region.bounds;
            let center = origin + b.center();
            let size = Vec2::new(b.w, b.h);
            let hovered = self.hovered == Some(region.id);

            if hovered {
                let id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(id)
                        .with_tag("region_glow")
                        .with_pos(center)
                        .with_size(size)
                        .with_layer(RenderLayer::Markers)
                        .with_visual(Visual::Fill {
                            color: Palette::Highlight,
                            alpha: 0.25,
                        }),
                );
            }

            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("region_frame")
                    .with_pos(center)
                    .with_size(size)
                    .with_layer(RenderLayer::Markers)
                    .with_visual(Visual::Frame {
                        color: if hovered { Palette::Highlight } else { Palette::Blue },
                        width: if hovered { 4.0 } else { 2.0 },
                    }),
            );

            // letter tab in the corner
            let tab_center = origin + Vec2::new(b.x + 11.0, b.y + 11.0);
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("region_label")
                    .with_pos(tab_center)
                    .with_size(Vec2::splat(22.0))
                    .with_layer(RenderLayer::Markers)
                    .with_visual(Visual::Fill {
                        color: Palette::White,
                        alpha: 0.9,
                    }),
            );
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("region_label")
                    .with_pos(tab_center)
                    .with_size(Vec2::splat(22.0))
                    .with_layer(RenderLayer::Markers)
                    .with_visual(Visual::Frame {
                        color: Palette::Black,
                        width: 1.0,
                    }),
            );
            self.spawn_text(
                ctx,
                region.id.code(),
                tab_center - Vec2::splat(9.0),
                18.0,
                Palette::Black,
                RenderLayer::Markers,
                "region_label",
            );
        }
    }

    fn spawn_hud(&self, ctx: &mut EngineContext) {
        // score box, top-left
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("score")
                .with_pos(Vec2::new(70.0, 30.0))
                .with_size(Vec2::new(100.0, 30.0))
                .with_layer(RenderLayer::Ui)
                .with_visual(Visual::Fill {
                    color: Palette::White,
                    alpha: 1.0,
                }),
        );
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("score")
                .with_pos(Vec2::new(70.0, 30.0))
                .with_size(Vec2::new(100.0, 30.0))
                .with_layer(RenderLayer::Ui)
                .with_visual(Visual::Frame {
                    color: Palette::Black,
                    width: 2.0,
                }),
        );
        let score_text = format!("Score: {}/{}", self.session.correct(), self.session.answered());
        self.spawn_text(
            ctx,
            &score_text,
            Vec2::new(28.0, 21.0),
            18.0,
            Palette::Black,
            RenderLayer::Ui,
            "score",
        );

        // question prompt above the feedback bar
        if self.session.state() == GameState::Playing {
            self.spawn_text_centered(
                ctx,
                &self.session.prompt(),
                WORLD_WIDTH / 2.0,
                495.0,
                24.0,
                Palette::Blue,
                RenderLayer::Ui,
                "prompt",
            );
        }

        // feedback bar
        let feedback = self.session.feedback();
        let bar_color = match feedback.kind {
            FeedbackKind::Neutral => Palette::Black,
            FeedbackKind::Correct => Palette::Green,
            FeedbackKind::Incorrect => Palette::Red,
        };
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("feedback")
                .with_pos(Vec2::new(WORLD_WIDTH / 2.0, 550.0))
                .with_size(Vec2::new(WORLD_WIDTH, 40.0))
                .with_layer(RenderLayer::Ui)
                .with_visual(Visual::Fill {
                    color: bar_color,
                    alpha: 0.85,
                }),
        );
        self.spawn_text_centered(
            ctx,
            &feedback.text,
            WORLD_WIDTH / 2.0,
            540.0,
            20.0,
            Palette::White,
            RenderLayer::Ui,
            "feedback",
        );

        self.spawn_text_centered(
            ctx,
            "Click on components to identify them. Press ESC to quit.",
            WORLD_WIDTH / 2.0,
            578.0,
            14.0,
            Palette::White,
            RenderLayer::Ui,
            "instructions",
        );
    }

    fn spawn_popup(&self, ctx: &mut EngineContext, origin: Vec2) {
        let Some(popup) = self.popup.current() else {
            return;
        };
        let Some(region) = self.registry.get(popup.region) else {
            return;
        };
        let anchor = origin + region.bounds.center() + Vec2::new(0.0, -40.0);
        let w = text_width(&popup.text, 18.0, &self.font) + 20.0;
        let h = 30.0;

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("popup")
                .with_pos(anchor)
                .with_size(Vec2::new(w, h))
                .with_layer(RenderLayer::Overlay)
                .with_visual(Visual::Fill {
                    color: Palette::White,
                    alpha: 1.0,
                }),
        );
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("popup")
                .with_pos(anchor)
                .with_size(Vec2::new(w, h))
                .with_layer(RenderLayer::Overlay)
                .with_visual(Visual::Frame {
                    color: if popup.correct { Palette::Green } else { Palette::Red },
                    width: 3.0,
                }),
        );
        self.spawn_text_centered(
            ctx,
            &popup.text,
            anchor.x,
            anchor.y - 9.0,
            18.0,
            Palette::Black,
            RenderLayer::Overlay,
            "popup",
        );
    }

    fn spawn_tooltip(&self, ctx: &mut EngineContext, origin: Vec2) {
        let Some(tip) = &self.tooltip else {
            return;
        };
        let anchor = origin + tip.anchor + Vec2::new(0.0, 48.0);
        let w = text_width(&tip.text, 16.0, &self.font) + 16.0;

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag("tooltip")
                .with_pos(anchor)
                .with_size(Vec2::new(w, 26.0))
                .with_layer(RenderLayer::Overlay)
                .with_visual(Visual::Fill {
                    color: Palette::Black,
                    alpha: 0.8,
                }),
        );
        self.spawn_text_centered(
            ctx,
            &tip.text,
            anchor.x,
            anchor.y - 8.0,
            16.0,
            Palette::White,
            RenderLayer::Overlay,
            "tooltip",
        );
    }

    fn spawn_verdict(&self, ctx: &mut EngineContext) {
        let (line, color) = match self.session.state() {
            GameState::Playing => return,
            GameState::Won => ("You win!", Palette::Green),
            GameState::Lost => ("Try again!", Palette::Red),
        };
        self.spawn_text_centered(
            ctx,
            line,
            WORLD_WIDTH / 2.0,
            250.0,
            36.0,
            color,
            RenderLayer::Ui,
            "banner",
        );
        self.spawn_text_centered(
            ctx,
            "Press R to play again",
            WORLD_WIDTH / 2.0,
            300.0,
            24.0,
            Palette::Black,
            RenderLayer::Ui,
            "banner",
        );
    }
}

impl Game for UnderTheHood {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ..GameConfig::default()
        }
    }

    fn load_manifest(&mut self, json: &str) {
        let manifest = match AssetManifest::from_json(json) {
            Ok(m) => m,
            Err(err) => {
                log::warn!("asset manifest unreadable, running without assets: {err}");
                return;
            }
        };
        self.sounds = manifest
            .sounds
            .iter()
            .map(|(name, desc)| (name.clone(), desc.event_id))
            .collect();
        self.registry = RegionRegistry::from_manifest(&manifest);
        // geometry is unchanged, the running session stays valid
        log::info!(
            "manifest loaded: artwork={}, masks={}, sounds={}",
            self.registry.artwork_loaded(),
            self.registry.iter().filter(|r| r.mask.is_some()).count(),
            self.sounds.len()
        );
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.sync_entities(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => self.handle_click(ctx, Vec2::new(x, y)),
                InputEvent::PointerMove { x, y } => self.cursor = Some(Vec2::new(x, y)),
                InputEvent::PointerUp { .. } => {}
                InputEvent::KeyDown { key_code } => match key_code {
                    KEY_ESCAPE => {
                        ctx.emit_event(GameEvent::new(EVENT_QUIT, 0.0, 0.0, 0.0));
                    }
                    KEY_R => self.try_restart(ctx),
                    _ => {}
                },
                InputEvent::KeyUp { .. } => {}
                InputEvent::Custom { kind, .. } => {
                    if kind == CUSTOM_RESTART {
                        self.try_restart(ctx);
                    }
                }
            }
        }

        self.popup.tick();

        self.hovered = if self.session.state() == GameState::Playing {
            self.cursor
                .and_then(|c| hit_test::resolve(&self.registry, self.screen_to_content(c)))
        } else {
            None
        };
        self.tooltip = Tooltip::compute(&self.registry, self.hovered, self.session.state());

        self.sync_entities(ctx);
    }
}
