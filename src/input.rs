//! Input latch
//!
//! Records press/release transitions delivered by the platform event loop so
//! the simulation can read held levels once per tick, independent of when
//! the events arrived.

/// Keys the game cares about; everything else maps to `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    R,
    Escape,
    Other,
}

/// Platform-neutral input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseButtonDown,
    MouseButtonUp,
    MouseMotion { dx: f32, dy: f32 },
}

/// Whether the event boundary should stop propagating an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Consumed,
    Ignored,
}

impl EventResponse {
    pub fn is_consumed(self) -> bool {
        self == EventResponse::Consumed
    }
}

/// Held level plus a count of presses since the last tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    pub pressed: bool,
    pub downs: u32,
}

impl Button {
    fn press(&mut self) {
        self.downs += 1;
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }
}

/// Latched state of the four logical controls
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pub left: Button,
    pub right: Button,
    pub boost: Button,
    pub restart: Button,
    /// Exclusive pointer mode (relative mouse) is held
    pointer_captured: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    fn button_mut(&mut self, key: Key) -> Option<&mut Button> {
        match key {
            Key::ArrowLeft => Some(&mut self.left),
            Key::ArrowRight => Some(&mut self.right),
            Key::Space => Some(&mut self.boost),
            Key::R => Some(&mut self.restart),
            Key::Escape | Key::Other => None,
        }
    }

    /// Apply one platform event to the latch
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        match *event {
            InputEvent::KeyDown(Key::Escape) => {
                if self.pointer_captured {
                    self.pointer_captured = false;
                    log::debug!("Pointer released");
                    EventResponse::Consumed
                } else {
                    EventResponse::Ignored
                }
            }
            InputEvent::KeyDown(key) => match self.button_mut(key) {
                Some(button) => {
                    button.press();
                    EventResponse::Consumed
                }
                None => EventResponse::Ignored,
            },
            InputEvent::KeyUp(key) => match self.button_mut(key) {
                Some(button) => {
                    button.release();
                    EventResponse::Consumed
                }
                None => EventResponse::Ignored,
            },
            InputEvent::MouseButtonDown if !self.pointer_captured => {
                self.pointer_captured = true;
                log::debug!("Pointer captured");
                EventResponse::Consumed
            }
            InputEvent::MouseButtonDown
            | InputEvent::MouseButtonUp
            | InputEvent::MouseMotion { .. } => EventResponse::Ignored,
        }
    }

    /// Reset press counters after a tick has consumed them
    pub fn clear_downs(&mut self) {
        self.left.downs = 0;
        self.right.downs = 0;
        self.boost.downs = 0;
        self.restart.downs = 0;
    }
}
