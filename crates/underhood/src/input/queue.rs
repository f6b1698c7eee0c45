/// Input event types the quiz core understands.
/// Coordinates are screen-space world units; the game converts them to
/// content space itself. The host forwards only left-button presses as
/// PointerDown.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The left button was pressed at (x, y).
    PointerDown { x: f32, y: f32 },
    /// The left button was released at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed (JS key code).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// A custom event from the host UI (e.g. a "play again" button).
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; the game reads them each tick in
/// arrival order. Events are never coalesced — a burst of clicks is a burst
/// of answers.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::KeyDown { key_code: 82 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn iter_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 1.0, y: 0.0 });
        q.push(InputEvent::PointerDown { x: 2.0, y: 0.0 });
        let xs: Vec<f32> = q
            .iter()
            .map(|e| match e {
                InputEvent::PointerDown { x, .. } => *x,
                _ => panic!("unexpected event"),
            })
            .collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }
}
