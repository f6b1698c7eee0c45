//! Point-to-region resolution.
//!
//! Points are in content space (illustration coordinates, origin top-left).
//! Regions are checked in registry order and the first hit wins; a region
//! whose mask is transparent at the point does not shadow later regions.

use crate::quiz::region::{RegionId, RegionRegistry};
use glam::Vec2;

/// Resolve a content-space point to the region it hits, if any.
///
/// A region with a mask hits only where the mask is opaque; a region
/// without one hits anywhere inside its bounding rectangle.
pub fn resolve(registry: &RegionRegistry, point: Vec2) -> Option<RegionId> {
    let content = registry.content_size();
    if point.x < 0.0 || point.y < 0.0 || point.x >= content.x || point.y >= content.y {
        return None;
    }

    for region in registry.iter() {
        if !region.bounds.contains(point) {
            continue;
        }
        match &region.mask {
            Some(mask) => {
                let local_x = (point.x - region.bounds.x) as u32;
                let local_y = (point.y - region.bounds.y) as u32;
                if mask.opaque_at(local_x, local_y) {
                    return Some(region.id);
                }
                // transparent pixel: keep looking, an overlapping region
                // underneath may still claim the point
            }
            None => return Some(region.id),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::{AssetManifest, MaskDescriptor};
    use std::collections::HashMap;

    fn masked_registry(rows: Vec<String>) -> RegionRegistry {
        let mut masks = HashMap::new();
        masks.insert(
            "A".to_string(),
            MaskDescriptor {
                width: 60,
                height: 60,
                rows,
            },
        );
        RegionRegistry::from_manifest(&AssetManifest {
            artwork: None,
            masks,
            sounds: HashMap::new(),
        })
    }

    #[test]
    fn rect_only_hit() {
        let reg = RegionRegistry::new();
        // Battery lives at (580, 150, 60, 60) but the placeholder content
        // area is 700x400, so only part of it is reachable
        assert_eq!(
            resolve(&reg, Vec2::new(600.0, 180.0)),
            Some(RegionId::Battery)
        );
        assert_eq!(resolve(&reg, Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn outside_content_bounds_misses() {
        let reg = RegionRegistry::new();
        assert_eq!(resolve(&reg, Vec2::new(-1.0, 180.0)), None);
        assert_eq!(resolve(&reg, Vec2::new(600.0, 400.0)), None);
        assert_eq!(resolve(&reg, Vec2::new(700.0, 180.0)), None);
    }

    #[test]
    fn mask_gates_the_hit() {
        // left half opaque, right half transparent
        let rows: Vec<String> = (0..60)
            .map(|_| format!("{}{}", "#".repeat(30), ".".repeat(30)))
            .collect();
        let reg = masked_registry(rows);

        // WasherReservoir bounds: (130, 155, 60, 60)
        assert_eq!(
            resolve(&reg, Vec2::new(140.0, 170.0)),
            Some(RegionId::WasherReservoir)
        );
        // inside the rect but on a transparent pixel
        assert_eq!(resolve(&reg, Vec2::new(175.0, 170.0)), None);
    }

    #[test]
    fn boundary_pixels_follow_the_mask() {
        let rows: Vec<String> = (0..60).map(|_| "#".repeat(60)).collect();
        let reg = masked_registry(rows);

        // top-left corner of the rect maps to mask pixel (0, 0)
        assert_eq!(
            resolve(&reg, Vec2::new(130.0, 155.0)),
            Some(RegionId::WasherReservoir)
        );
        // one past the right edge is outside the rect entirely
        assert_eq!(resolve(&reg, Vec2::new(190.0, 170.0)), None);
    }

    #[test]
    fn registry_order_breaks_ties() {
        // No overlaps in the stock layout, but order is still what the
        // contract promises: first region claiming the point wins.
        let reg = RegionRegistry::new();
        let ids: Vec<RegionId> = reg.iter().map(|r| r.id).collect();
        assert_eq!(ids[0], RegionId::WasherReservoir);
    }
}
