//! Ready-to-embed controls built on [`liner_ui`].
//!
//! Currently one control: [`slider::Slider`], a horizontal range slider with
//! pointer dragging, keyboard stepping, and assistive-technology metadata.
//! The control owns values and interaction only; rendering goes through the
//! host's [`host::HostSurface`] implementation.

#![deny(missing_docs, clippy::unwrap_used)]

pub mod config;
pub mod host;
pub mod slider;

pub use config::{AttributeSource, SliderConfig};
pub use host::HostSurface;
pub use slider::{Slider, SliderArgs};
