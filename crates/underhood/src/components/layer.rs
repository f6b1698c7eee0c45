/// Render layer — controls draw order for entities.
///
/// Layers are drawn back-to-front: Background first, Ui last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Full-screen backdrop.
    Background = 0,
    /// The engine-bay illustration (or its placeholder panel).
    Artwork = 1,
    /// Region frames, hover highlight, and the A-F labels.
    #[default]
    Markers = 2,
    /// Transient popup and tooltip boxes.
    Overlay = 3,
    /// Title bar, score box, feedback bar, banners, instructions.
    Ui = 4,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 5;

    /// Convert from a u8 value. Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Artwork),
            2 => Some(Self::Markers),
            3 => Some(Self::Overlay),
            4 => Some(Self::Ui),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
