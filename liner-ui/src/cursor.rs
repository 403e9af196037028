//! Pointer state tracking and event queuing.
//!
//! Hosts translate their native pointer input (DOM mouse events, winit cursor
//! events, test harness calls) into this module's vocabulary. [`CursorState`]
//! tracks the last known pointer position and keeps a bounded queue of
//! [`CursorEvent`]s; the slider drains the queue with
//! [`CursorState::take_events`] and applies the events in delivery order.
//!
//! The queue is bounded: when the host falls behind, the oldest events are
//! dropped. For a slider this is lossless in effect: a later move supersedes
//! an earlier one, and press/release pairs are never older than the cap.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::px::PxPosition;

/// Maximum number of pointer events retained between drains.
const KEEP_EVENTS_COUNT: usize = 10;

/// What happened at a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEventContent {
    /// The primary button went down.
    Pressed,
    /// The pointer moved.
    Moved,
    /// The primary button was released.
    Released,
    /// A context menu was requested. Ends a drag, like a release.
    ContextMenu,
}

/// A single pointer event with the position it was observed at.
///
/// `position` is `None` when the pointer location is unknown, e.g. a release
/// delivered after the pointer left the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorEvent {
    /// Pointer position at the time of the event, if known.
    pub position: Option<PxPosition>,
    /// The kind of event.
    pub content: CursorEventContent,
}

/// Tracks pointer position and queues pointer events for the slider.
///
/// One `CursorState` per host document: move/release events are captured
/// document-wide so a drag keeps tracking the pointer after it leaves the
/// handle.
#[derive(Debug, Default)]
pub struct CursorState {
    position: Option<PxPosition>,
    events: VecDeque<CursorEvent>,
}

impl CursorState {
    /// Creates an empty cursor state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move and queues a [`CursorEventContent::Moved`]
    /// event at the new position.
    pub fn handle_move(&mut self, position: PxPosition) {
        self.position = Some(position);
        self.push_event(CursorEvent {
            position: Some(position),
            content: CursorEventContent::Moved,
        });
    }

    /// Records a primary-button press at the last known position.
    pub fn handle_press(&mut self) {
        self.push_event(CursorEvent {
            position: self.position,
            content: CursorEventContent::Pressed,
        });
    }

    /// Records a primary-button release at the last known position.
    pub fn handle_release(&mut self) {
        self.push_event(CursorEvent {
            position: self.position,
            content: CursorEventContent::Released,
        });
    }

    /// Records a context-menu request at the last known position.
    pub fn handle_context_menu(&mut self) {
        self.push_event(CursorEvent {
            position: self.position,
            content: CursorEventContent::ContextMenu,
        });
    }

    /// Forgets the pointer position, e.g. when the pointer leaves the host
    /// window entirely.
    pub fn handle_leave(&mut self) {
        self.position = None;
    }

    /// The last known pointer position.
    pub fn position(&self) -> Option<PxPosition> {
        self.position
    }

    /// Removes and returns all queued events, oldest first.
    pub fn take_events(&mut self) -> SmallVec<[CursorEvent; KEEP_EVENTS_COUNT]> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: CursorEvent) {
        self.events.push_back(event);
        if self.events.len() > KEEP_EVENTS_COUNT {
            self.events.pop_front();
        }
    }
}
