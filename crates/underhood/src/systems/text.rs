//! Bitmap font text rendering.
//!
//! Text goes through the ordinary draw pipeline — each character becomes an
//! Entity with a Glyph visual indexing into the host's font atlas.
//! The atlas is a grid of glyphs laid out in ASCII order, typically
//! 16 columns × 6 rows for printable ASCII (32-127).

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::visual::{Palette, Visual};
use glam::Vec2;

/// Configuration for a bitmap font atlas.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Number of columns in the font atlas grid.
    pub cols: u32,
    /// Number of rows in the font atlas grid.
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Horizontal advance as fraction of glyph size.
    pub spacing: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 6,
            start_char: 32,
            spacing: 0.55,
        }
    }
}

/// Convert an ASCII character to its glyph index in the font atlas.
///
/// Returns `None` if the character is outside the valid range for this font.
pub fn glyph_index(c: char, font: &FontConfig) -> Option<u32> {
    let ascii = c as u32;
    let start = font.start_char as u32;

    if ascii < start {
        return None;
    }

    let index = ascii - start;
    if index >= font.cols * font.rows {
        return None;
    }

    Some(index)
}

/// Width of a rendered string in world units. Used for centering.
pub fn text_width(text: &str, size: f32, font: &FontConfig) -> f32 {
    text.chars().count() as f32 * size * font.spacing
}

/// Build glyph entities for the given text.
///
/// `pos` is the top-left corner of the first glyph box. Characters outside
/// the font's range are skipped but still advance the cursor, so spacing is
/// preserved.
#[allow(clippy::too_many_arguments)]
pub fn build_text_entities<F>(
    text: &str,
    pos: Vec2,
    size: f32,
    color: Palette,
    layer: RenderLayer,
    font: &FontConfig,
    tag: &str,
    id_gen: &mut F,
) -> Vec<Entity>
where
    F: FnMut() -> EntityId,
{
    let mut entities = Vec::new();
    let mut cursor_x = pos.x;

    for c in text.chars() {
        if let Some(index) = glyph_index(c, font) {
            let id = id_gen();
            let entity = Entity::new(id)
                .with_tag(tag)
                .with_pos(Vec2::new(cursor_x + size / 2.0, pos.y + size / 2.0))
                .with_size(Vec2::splat(size))
                .with_layer(layer)
                .with_visual(Visual::Glyph { index, color });
            entities.push(entity);
        }
        cursor_x += size * font.spacing;
    }

    entities
}
