use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset manifest describing the artwork, per-region hit masks, and sounds.
/// Loaded from a JSON file by the host and handed to the game at startup.
/// Every section is optional; whatever is missing degrades gracefully
/// (placeholder panel, rect-only hit-testing, silent audio).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// The engine-bay illustration, already scaled to content size.
    #[serde(default)]
    pub artwork: Option<ArtworkDescriptor>,
    /// Pixel-opacity masks keyed by region code ("A".."F").
    #[serde(default)]
    pub masks: HashMap<String, MaskDescriptor>,
    /// Audio clips keyed by name, with the event id the host listens for.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes the illustration image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkDescriptor {
    /// Relative path to the image file (e.g., "car_engine.png").
    pub path: String,
    /// Content-space width after scaling.
    pub width: u32,
    /// Content-space height after scaling.
    pub height: u32,
}

/// Row-per-string bitmap with the same dimensions as the region's bounding
/// rectangle: '#' marks an opaque pixel, anything else is transparent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskDescriptor {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<String>,
}

/// Describes an audio clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this clip from the quiz core.
    pub event_id: u32,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r##"{
            "artwork": { "path": "car_engine.png", "width": 700, "height": 437 },
            "masks": {
                "A": { "width": 2, "height": 2, "rows": ["#.", ".#"] }
            },
            "sounds": {
                "correct": { "path": "correct.wav", "event_id": 1 },
                "wrong": { "path": "wrong.wav", "event_id": 2 }
            }
        }"##;
        let manifest = AssetManifest::from_json(json).unwrap();

        let artwork = manifest.artwork.unwrap();
        assert_eq!(artwork.width, 700);
        assert_eq!(manifest.masks["A"].rows, vec!["#.", ".#"]);
        assert_eq!(manifest.sounds["correct"].event_id, 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.artwork.is_none());
        assert!(manifest.masks.is_empty());
        assert!(manifest.sounds.is_empty());
    }

    #[test]
    fn garbage_is_an_error_not_a_panic() {
        assert!(AssetManifest::from_json("not json").is_err());
    }
}
