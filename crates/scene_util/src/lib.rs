//! # scene_util
//!
//! Helper functions that make day-to-day game code shorter:
//!
//! - [`create`] — spawn shortcuts for empty objects and prefab instances.
//! - [`ext`] — extension traits: asset lookup by id, float snapping, and
//!   the nearest-terrain search.
//! - [`gizmos`] — editor-only debug drawing (requires the `editor`
//!   feature, on by default).
//! - [`color`] — the color type and the project's named colors.
//!
//! Everything here is stateless glue over `scene_core`: each function
//! takes fully formed inputs and returns a derived value or a freshly
//! spawned object, retaining no ownership of either.

pub mod color;
pub mod create;
pub mod ext;
#[cfg(feature = "editor")]
pub mod gizmos;

pub use color::Color;
pub use ext::{AssetSliceExt, DEFAULT_SNAP_THRESHOLD, FloatExt, TransformExt};
#[cfg(feature = "editor")]
pub use gizmos::{GizmoBuffer, GizmoCommand};
