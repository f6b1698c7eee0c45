use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::visual::Visual;
use glam::Vec2;

/// Fat entity — a single struct with optional parts.
/// The quiz scene is rebuilt from game state every tick, so entities are
/// cheap, short-lived draw descriptions rather than long-lived objects.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Center position in world space.
    pub pos: Vec2,
    /// Rendered size in world units (width, height).
    pub size: Vec2,
    /// Draw-order layer.
    pub layer: RenderLayer,
    /// Visual component (optional — entities without one are invisible).
    pub visual: Option<Visual>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            layer: RenderLayer::default(),
            visual: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }
}
