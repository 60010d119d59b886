//! # scene_core
//!
//! The minimal scene primitives the helper crates operate on.
//!
//! This crate provides:
//!
//! - [`ObjectId`] — lightweight `u64` object identifiers.
//! - [`SceneObject`] / [`Scene`] — named, transformed objects with plain
//!   parent links, stored in spawn order.
//! - [`Prefab`] / [`SetupAsset`] — reusable object templates and the
//!   id-keyed asset pool built from them.
//! - [`Behaviour`] / [`BehaviourDatabase`] — a registry of object-bound
//!   behaviours, owned and populated by game code.
//! - [`TerrainComponent`] — the behaviour marking terrain chunks.
//!
//! It is deliberately not an ECS: no archetypes, no queries, no change
//! tracking. Objects are looked up by id and behaviours by downcast.

pub mod behaviour;
pub mod object;
pub mod prefab;
pub mod scene;

pub use behaviour::{Behaviour, BehaviourDatabase, TerrainComponent};
pub use object::{ObjectAllocator, ObjectId, SceneObject};
pub use prefab::{Prefab, SetupAsset};
pub use scene::{Scene, SceneError};
