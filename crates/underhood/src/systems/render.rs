use crate::components::entity::Entity;
use crate::components::visual::Visual;
use crate::renderer::instance::{
    RenderBuffer, RenderInstance, KIND_ARTWORK, KIND_FILL, KIND_FRAME, KIND_GLYPH,
};

/// Build the render buffer from the scene.
/// Instances are emitted back-to-front: sorted by layer, spawn order
/// preserved within a layer (the sort is stable).
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    let mut draws: Vec<(u8, RenderInstance)> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let visual = match &entity.visual {
            Some(v) => v,
            None => continue,
        };

        let mut instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            w: entity.size.x,
            h: entity.size.y,
            alpha: 1.0,
            ..Default::default()
        };

        match *visual {
            Visual::Artwork => {
                instance.kind = KIND_ARTWORK;
            }
            Visual::Fill { color, alpha } => {
                instance.kind = KIND_FILL;
                instance.a = color.as_f32();
                instance.alpha = alpha;
            }
            Visual::Frame { color, width } => {
                instance.kind = KIND_FRAME;
                instance.a = color.as_f32();
                instance.b = width;
            }
            Visual::Glyph { index, color } => {
                instance.kind = KIND_GLYPH;
                instance.a = index as f32;
                instance.b = color.as_f32();
            }
        }

        draws.push((entity.layer.as_u8(), instance));
    }

    draws.sort_by_key(|(layer, _)| *layer);

    for (_, instance) in draws {
        buffer.push(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::layer::RenderLayer;
    use crate::components::visual::Palette;
    use glam::Vec2;

    #[test]
    fn build_buffer_orders_by_layer() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_layer(RenderLayer::Ui)
                .with_visual(Visual::Fill {
                    color: Palette::White,
                    alpha: 1.0,
                }),
            Entity::new(EntityId(2))
                .with_layer(RenderLayer::Background)
                .with_visual(Visual::Fill {
                    color: Palette::Gray,
                    alpha: 1.0,
                }),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        // Background entity drawn first despite later spawn order
        assert_eq!(buffer.instances[0].a, Palette::Gray.as_f32());
        assert_eq!(buffer.instances[1].a, Palette::White.as_f32());
    }

    #[test]
    fn inactive_and_invisible_entities_are_skipped() {
        let mut inactive = Entity::new(EntityId(1)).with_visual(Visual::Artwork);
        inactive.active = false;
        let invisible = Entity::new(EntityId(2));

        let entities = vec![inactive, invisible];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn visual_fields_map_into_the_wire_format() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec2::new(10.0, 20.0))
                .with_size(Vec2::new(60.0, 40.0))
                .with_visual(Visual::Frame {
                    color: Palette::Blue,
                    width: 2.0,
                }),
            Entity::new(EntityId(2)).with_visual(Visual::Glyph {
                index: 33,
                color: Palette::Black,
            }),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        let frame = &buffer.instances[0];
        assert_eq!(frame.kind, KIND_FRAME);
        assert_eq!((frame.x, frame.y), (10.0, 20.0));
        assert_eq!((frame.w, frame.h), (60.0, 40.0));
        assert_eq!(frame.a, Palette::Blue.as_f32());
        assert_eq!(frame.b, 2.0);

        let glyph = &buffer.instances[1];
        assert_eq!(glyph.kind, KIND_GLYPH);
        assert_eq!(glyph.a, 33.0);
        assert_eq!(glyph.b, Palette::Black.as_f32());
    }
}
