use bytemuck::{Pod, Zeroable};

/// Draw-command kinds understood by the host renderer.
pub const KIND_ARTWORK: f32 = 0.0;
pub const KIND_FILL: f32 = 1.0;
pub const KIND_FRAME: f32 = 2.0;
pub const KIND_GLYPH: f32 = 3.0;

/// Per-instance draw command written to the shared buffer for the host
/// renderer. Must match the host protocol: 8 floats = 32 bytes stride.
///
/// Meaning of `a`/`b` by kind:
/// - artwork: unused
/// - fill:    a = palette index
/// - frame:   a = palette index, b = line width
/// - glyph:   a = glyph index in the font atlas, b = palette index
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// Center X in world space.
    pub x: f32,
    /// Center Y in world space.
    pub y: f32,
    /// Width in world units.
    pub w: f32,
    /// Height in world units.
    pub h: f32,
    /// One of the KIND_* constants.
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all draw commands for one frame,
/// already in back-to-front order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 32);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn render_buffer_push_and_count() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
