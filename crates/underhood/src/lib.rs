pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod quiz;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::visual::{Palette, Visual};
pub use crate::core::rng::Rng;
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use quiz::game::UnderTheHood;
pub use quiz::hit_test::resolve;
pub use quiz::overlay::{Popup, PopupTimer, Tooltip, POPUP_TICKS};
pub use quiz::region::{PixelMask, Rect, Region, RegionId, RegionRegistry};
pub use quiz::session::{Feedback, FeedbackKind, GameState, QuizSession};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::render::build_render_buffer;
pub use systems::text::FontConfig;
