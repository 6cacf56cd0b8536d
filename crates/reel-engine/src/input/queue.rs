/// Key code the hosts use for Escape.
pub const KEY_ESCAPE: u32 = 27;

/// Input event types the engine understands.
/// Scenes are not interactive: these only ever end playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed or the host asked us to quit.
    Quit,
    /// A key was pressed.
    KeyDown { key_code: u32 },
}

impl InputEvent {
    /// Whether this event ends the scene.
    pub fn is_stop(&self) -> bool {
        matches!(
            self,
            InputEvent::Quit | InputEvent::KeyDown { key_code: KEY_ESCAPE }
        )
    }
}

/// Anything that can deliver input events (a window, the browser, a test).
pub trait InputSource {
    /// Push every event that arrived since the last poll.
    fn poll(&mut self, queue: &mut InputQueue);
}

/// A queue of input events.
/// Hosts push events; the driver reads and drains them once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether any pending event asks to stop.
    pub fn stop_requested(&self) -> bool {
        self.events.iter().any(InputEvent::is_stop)
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

/// Input source that never produces anything. For headless playback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self, _queue: &mut InputQueue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 32 });
        q.push(InputEvent::Quit);
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn quit_and_escape_stop() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 32 });
        assert!(!q.stop_requested());

        q.push(InputEvent::KeyDown {
            key_code: KEY_ESCAPE,
        });
        assert!(q.stop_requested());

        q.drain();
        q.push(InputEvent::Quit);
        assert!(q.stop_requested());
    }

    #[test]
    fn no_input_stays_empty() {
        let mut q = InputQueue::new();
        NoInput.poll(&mut q);
        assert!(q.is_empty());
    }
}
