use crate::assets::manifest::{AssetManifest, MaskDescriptor};
use glam::Vec2;

/// Placeholder content size when no artwork is available.
/// Geometry and ids never depend on the asset; only fidelity does.
pub const PLACEHOLDER_WIDTH: f32 = 700.0;
pub const PLACEHOLDER_HEIGHT: f32 = 400.0;

/// The six engine-bay components the quiz asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    WasherReservoir,
    BrakeFluidReservoir,
    OilDipstick,
    OilCap,
    CoolantReservoir,
    Battery,
}

impl RegionId {
    /// Registry order. Hit-testing and question drawing both follow it.
    pub const ALL: [RegionId; 6] = [
        RegionId::WasherReservoir,
        RegionId::BrakeFluidReservoir,
        RegionId::OilDipstick,
        RegionId::OilCap,
        RegionId::CoolantReservoir,
        RegionId::Battery,
    ];

    /// One-letter label drawn on the illustration.
    pub fn code(self) -> &'static str {
        match self {
            RegionId::WasherReservoir => "A",
            RegionId::BrakeFluidReservoir => "B",
            RegionId::OilDipstick => "C",
            RegionId::OilCap => "D",
            RegionId::CoolantReservoir => "E",
            RegionId::Battery => "F",
        }
    }

    /// Human-readable component name.
    pub fn name(self) -> &'static str {
        match self {
            RegionId::WasherReservoir => "Windshield Washer Reservoir",
            RegionId::BrakeFluidReservoir => "Brake Fluid Reservoir",
            RegionId::OilDipstick => "Oil Dipstick",
            RegionId::OilCap => "Oil Cap",
            RegionId::CoolantReservoir => "Coolant Reservoir",
            RegionId::Battery => "Battery",
        }
    }
}

/// Axis-aligned rectangle in content space (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// Per-pixel opacity map restricting hits to the visible pixels of an
/// irregularly shaped region. Dimensions match the region's bounding rect.
#[derive(Debug, Clone)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Build from row strings ('#' = opaque). Returns None if any row length
    /// disagrees with the stated width or the row count with the height.
    pub fn from_rows(width: u32, height: u32, rows: &[impl AsRef<str>]) -> Option<Self> {
        if rows.len() != height as usize {
            return None;
        }
        let mut bits = Vec::with_capacity((width * height) as usize);
        for row in rows {
            let row = row.as_ref();
            if row.chars().count() != width as usize {
                return None;
            }
            bits.extend(row.chars().map(|c| c == '#'));
        }
        Some(Self {
            width,
            height,
            bits,
        })
    }

    pub fn from_descriptor(desc: &MaskDescriptor) -> Option<Self> {
        Self::from_rows(desc.width, desc.height, &desc.rows)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at local coordinates is opaque.
    /// Out-of-range coordinates are transparent.
    pub fn opaque_at(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }
}

/// One clickable quiz target.
#[derive(Debug, Clone)]
pub struct Region {
    pub id: RegionId,
    pub name: &'static str,
    /// Bounding rectangle in content space.
    pub bounds: Rect,
    /// Optional pixel-accurate hit mask; absent = rect-only (fallback mode).
    pub mask: Option<PixelMask>,
    /// Optional tooltip text.
    pub blurb: Option<&'static str>,
}

/// Order-stable table of all regions plus the content-area size.
/// Defined once at startup, immutable afterwards.
pub struct RegionRegistry {
    regions: Vec<Region>,
    content_size: Vec2,
    artwork_loaded: bool,
}

/// Bounding rectangles matched to the illustration.
fn bounds_for(id: RegionId) -> Rect {
    match id {
        RegionId::WasherReservoir => Rect::new(130.0, 155.0, 60.0, 60.0),
        RegionId::BrakeFluidReservoir => Rect::new(30.0, 320.0, 60.0, 60.0),
        RegionId::OilDipstick => Rect::new(105.0, 380.0, 60.0, 60.0),
        RegionId::OilCap => Rect::new(255.0, 150.0, 60.0, 60.0),
        RegionId::CoolantReservoir => Rect::new(410.0, 120.0, 60.0, 60.0),
        RegionId::Battery => Rect::new(580.0, 150.0, 60.0, 60.0),
    }
}

fn blurb_for(id: RegionId) -> Option<&'static str> {
    match id {
        RegionId::WasherReservoir => Some("Holds washer fluid for the windshield jets."),
        RegionId::BrakeFluidReservoir => Some("Hydraulic fluid for the braking system."),
        RegionId::OilDipstick => Some("Pull to check the engine oil level."),
        RegionId::OilCap => Some("Top up engine oil here."),
        RegionId::CoolantReservoir => Some("Expansion tank for engine coolant."),
        RegionId::Battery => Some("12V battery powering the starter and electronics."),
    }
}

impl RegionRegistry {
    /// Registry without any assets: rect-only hit-testing, placeholder panel.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Registry enriched by a parsed manifest: content size from the artwork
    /// descriptor, pixel masks where the manifest carries well-formed ones.
    /// Anything malformed or absent falls back without changing geometry.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        Self::build(Some(manifest))
    }

    fn build(manifest: Option<&AssetManifest>) -> Self {
        let artwork = manifest.and_then(|m| m.artwork.as_ref());
        let content_size = match artwork {
            Some(a) => Vec2::new(a.width as f32, a.height as f32),
            None => {
                log::warn!("artwork missing; drawing placeholder panel");
                Vec2::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
            }
        };

        let regions = RegionId::ALL
            .iter()
            .map(|&id| {
                let bounds = bounds_for(id);
                let mask = manifest
                    .and_then(|m| m.masks.get(id.code()))
                    .and_then(|desc| {
                        if desc.width != bounds.w as u32 || desc.height != bounds.h as u32 {
                            log::warn!("mask for region {} has wrong dimensions; ignoring", id.code());
                            return None;
                        }
                        let mask = PixelMask::from_descriptor(desc);
                        if mask.is_none() {
                            log::warn!("mask for region {} is malformed; ignoring", id.code());
                        }
                        mask
                    });
                Region {
                    id,
                    name: id.name(),
                    bounds,
                    mask,
                    blurb: blurb_for(id),
                }
            })
            .collect();

        Self {
            regions,
            content_size,
            artwork_loaded: artwork.is_some(),
        }
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Iterate regions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// All region ids, in registry order.
    pub fn ids(&self) -> Vec<RegionId> {
        self.regions.iter().map(|r| r.id).collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Content-area size (the illustration's scaled dimensions).
    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    pub fn artwork_loaded(&self) -> bool {
        self.artwork_loaded
    }
}

impl Default for RegionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::ArtworkDescriptor;
    use std::collections::HashMap;

    #[test]
    fn registry_is_order_stable() {
        let reg = RegionRegistry::new();
        let ids: Vec<RegionId> = reg.iter().map(|r| r.id).collect();
        assert_eq!(ids, RegionId::ALL.to_vec());
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn missing_artwork_keeps_geometry() {
        let bare = RegionRegistry::new();
        assert!(!bare.artwork_loaded());
        assert_eq!(
            bare.get(RegionId::Battery).unwrap().bounds,
            Rect::new(580.0, 150.0, 60.0, 60.0)
        );
        assert_eq!(
            bare.content_size(),
            Vec2::new(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
        );
    }

    #[test]
    fn manifest_supplies_content_size_and_masks() {
        let mut masks = HashMap::new();
        masks.insert(
            "A".to_string(),
            MaskDescriptor {
                width: 60,
                height: 60,
                rows: vec!["#".repeat(60); 60],
            },
        );
        let manifest = AssetManifest {
            artwork: Some(ArtworkDescriptor {
                path: "car_engine.png".to_string(),
                width: 700,
                height: 437,
            }),
            masks,
            sounds: HashMap::new(),
        };

        let reg = RegionRegistry::from_manifest(&manifest);
        assert!(reg.artwork_loaded());
        assert_eq!(reg.content_size(), Vec2::new(700.0, 437.0));
        assert!(reg.get(RegionId::WasherReservoir).unwrap().mask.is_some());
        assert!(reg.get(RegionId::Battery).unwrap().mask.is_none());
    }

    #[test]
    fn wrong_sized_mask_is_ignored() {
        let mut masks = HashMap::new();
        masks.insert(
            "A".to_string(),
            MaskDescriptor {
                width: 10,
                height: 10,
                rows: vec!["#".repeat(10); 10],
            },
        );
        let manifest = AssetManifest {
            artwork: None,
            masks,
            sounds: HashMap::new(),
        };

        let reg = RegionRegistry::from_manifest(&manifest);
        assert!(reg.get(RegionId::WasherReservoir).unwrap().mask.is_none());
    }

    #[test]
    fn pixel_mask_rejects_ragged_rows() {
        assert!(PixelMask::from_rows(3, 2, &["###", "##"]).is_none());
        assert!(PixelMask::from_rows(3, 2, &["###"]).is_none());

        let mask = PixelMask::from_rows(3, 2, &["#.#", ".#."]).unwrap();
        assert!(mask.opaque_at(0, 0));
        assert!(!mask.opaque_at(1, 0));
        assert!(mask.opaque_at(1, 1));
        assert!(!mask.opaque_at(3, 0)); // out of range
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 60.0, 60.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(69.9, 69.9)));
        assert!(!r.contains(Vec2::new(70.0, 40.0)));
        assert!(!r.contains(Vec2::new(9.9, 40.0)));
    }
}
