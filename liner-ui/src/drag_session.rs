//! Drag-session ownership across slider instances.
//!
//! ## Overview
//!
//! A drag must keep tracking the pointer after it leaves the handle, so
//! pointer-move and pointer-up listeners are attached at the document level.
//! With several sliders on one page, every instance sees those document-wide
//! events; only the instance that owns the active drag session may react.
//!
//! This module makes that ownership explicit. A [`DragArena`] is the shared
//! registry for one host document; each slider holds a [`DragSession`] handle
//! registered in the arena. At most one session per arena is active at a
//! time: beginning a session displaces any previous owner, and a session
//! releases itself when ended or dropped.
//!
//! ## Usage
//!
//! ```
//! use liner_ui::{DragArena, DragSession};
//!
//! let arena = DragArena::new();
//! let a = DragSession::new(&arena);
//! let b = DragSession::new(&arena);
//!
//! a.begin();
//! assert!(a.is_active());
//!
//! // A press on another slider takes the session over.
//! b.begin();
//! assert!(!a.is_active());
//! assert!(b.is_active());
//!
//! b.end();
//! assert!(!b.is_active());
//! ```
//!
//! ## Thread safety
//!
//! The registry is a `parking_lot::RwLock`; handles can be queried from any
//! thread, although the slider itself runs single-threaded on the UI thread.

use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

/// Shared drag-session registry for one host document.
///
/// Cloning an arena clones the handle, not the registry: all clones observe
/// the same active session.
#[derive(Clone, Default)]
pub struct DragArena {
    owner: Arc<RwLock<Option<Uuid>>>,
}

impl DragArena {
    /// Creates a registry with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any session in this arena is active.
    pub fn has_active_session(&self) -> bool {
        self.owner.read().is_some()
    }
}

/// A slider's handle on the drag-session registry.
///
/// Each slider instance creates one session at mount and keeps it for its
/// lifetime. The session identifies the instance by a unique id, so two
/// sliders in the same arena can never both believe they own the drag.
pub struct DragSession {
    arena: DragArena,
    id: Uuid,
}

impl DragSession {
    /// Registers a new session handle in the given arena.
    pub fn new(arena: &DragArena) -> Self {
        Self {
            arena: arena.clone(),
            id: Uuid::new_v4(),
        }
    }

    /// Takes ownership of the active drag, displacing any previous owner.
    pub fn begin(&self) {
        tracing::trace!(session = %self.id, "drag session begin");
        *self.arena.owner.write() = Some(self.id);
    }

    /// Returns `true` if this session currently owns the active drag.
    pub fn is_active(&self) -> bool {
        *self.arena.owner.read() == Some(self.id)
    }

    /// Releases the active drag if this session owns it. A session that was
    /// displaced by another owner leaves that owner untouched.
    pub fn end(&self) {
        let mut owner = self.arena.owner.write();
        if *owner == Some(self.id) {
            tracing::trace!(session = %self.id, "drag session end");
            *owner = None;
        }
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        self.end();
    }
}
