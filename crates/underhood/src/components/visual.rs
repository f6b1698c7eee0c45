/// Palette index understood by the host renderer.
/// Mirrors the quiz art direction: flat UI colors plus the orange hover
/// highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Palette {
    White = 0,
    Black = 1,
    Gray = 2,
    Blue = 3,
    Green = 4,
    Red = 5,
    Yellow = 6,
    Highlight = 7,
}

impl Palette {
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}

/// Visual component — how an entity appears. Entities without one are
/// invisible. Each variant maps to one draw-command kind in the wire format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    /// The engine-bay illustration, stretched to the entity's size.
    Artwork,
    /// Solid filled rectangle.
    Fill { color: Palette, alpha: f32 },
    /// Rectangle outline with the given line width in world units.
    Frame { color: Palette, width: f32 },
    /// One bitmap-font glyph, by index into the host's font atlas.
    Glyph { index: u32, color: Palette },
}
