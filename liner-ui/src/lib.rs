//! Host-agnostic plumbing for the liner slider component.
//!
//! This crate holds the pieces that are about *hosting* an interactive
//! control rather than about the slider itself: pixel coordinates, pointer
//! and keyboard event queues, callback handles, accessibility snapshots,
//! drag-session ownership, and cancellable timers.
//!
//! A host (a web-component shim, a winit window, a test harness) feeds native
//! input into [`CursorState`] and [`KeyboardState`], drives component timers
//! from its clock, and applies the render requests the component emits. The
//! component crate (`liner-components`) consumes everything here through
//! plain types; nothing in this crate knows what a track or a handle is.

#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod cursor;
pub mod drag_session;
pub mod keyboard;
pub mod prop;
pub mod px;
pub mod timer;

pub use accessibility::AccessibilityProps;
pub use cursor::{CursorEvent, CursorEventContent, CursorState};
pub use drag_session::{DragArena, DragSession};
pub use keyboard::{Key, KeyboardState};
pub use prop::CallbackWith;
pub use px::{Px, PxPosition};
pub use timer::Timer;
