//! Input message queue

use std::collections::VecDeque;

use super::InputEvent;

/// FIFO of input events waiting for the next frame
#[derive(Debug, Default, Clone)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one event
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all pending events in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

impl Extend<InputEvent> for InputQueue {
    fn extend<T: IntoIterator<Item = InputEvent>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, MouseButton};

    #[test]
    fn test_drain_preserves_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::key_press(KeyCode::D));
        queue.extend([
            InputEvent::MouseButton { button: MouseButton::Left, pressed: true },
            InputEvent::key_press(KeyCode::Space),
        ]);
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained[0], InputEvent::key_press(KeyCode::D));
        assert_eq!(drained[2], InputEvent::key_press(KeyCode::Space));
        assert!(queue.is_empty());
    }
}
