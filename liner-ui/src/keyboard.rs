//! Keyboard event model for the slider handle.
//!
//! The slider only reacts to six keys, so instead of threading a windowing
//! library's key type through the component, hosts map their native key codes
//! to [`Key`] and push them into a [`KeyboardState`] queue while the handle
//! has focus.

use std::collections::VecDeque;

use smallvec::SmallVec;

/// Maximum number of keyboard events retained between drains.
const KEEP_EVENTS_COUNT: usize = 10;

/// A key the slider handle responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Decrements the value by one step.
    ArrowLeft,
    /// Decrements the value by one step.
    ArrowDown,
    /// Increments the value by one step.
    ArrowRight,
    /// Increments the value by one step.
    ArrowUp,
    /// Jumps to the maximum value.
    Home,
    /// Jumps to the minimum value.
    End,
}

impl Key {
    /// Maps a DOM-style key code (`KeyboardEvent.code`) to a slider key.
    ///
    /// Returns `None` for codes the slider ignores.
    ///
    /// # Examples
    ///
    /// ```
    /// use liner_ui::Key;
    ///
    /// assert_eq!(Key::from_code("ArrowLeft"), Some(Key::ArrowLeft));
    /// assert_eq!(Key::from_code("KeyA"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// Bounded queue of keyboard events destined for the slider handle.
#[derive(Debug, Default)]
pub struct KeyboardState {
    events: VecDeque<Key>,
}

impl KeyboardState {
    /// Creates an empty keyboard state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key event, discarding the oldest one if the queue is full.
    pub fn push_event(&mut self, key: Key) {
        self.events.push_back(key);
        if self.events.len() > KEEP_EVENTS_COUNT {
            self.events.pop_front();
        }
    }

    /// Removes and returns all queued key events, oldest first.
    pub fn take_events(&mut self) -> SmallVec<[Key; KEEP_EVENTS_COUNT]> {
        self.events.drain(..).collect()
    }
}
