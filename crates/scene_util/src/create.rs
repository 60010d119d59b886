//! Spawn shortcuts.
//!
//! Thin factory helpers that spawn scene objects in one call instead of
//! building a [`SceneObject`] by hand each time. Each pair mirrors the
//! constructor split elsewhere in the workspace: a default variant using
//! the identity (or the prefab's stored) transform, and an `_at` variant
//! taking the full position / rotation / scale.

use scene_core::{ObjectId, Prefab, Scene, SceneObject};
use scene_math::{Quat, Transform, Vec3};

/// Spawn an empty object at the origin with identity rotation and unit
/// scale.
pub fn object(scene: &mut Scene, name: impl Into<String>, parent: Option<ObjectId>) -> ObjectId {
    object_at(
        scene,
        name,
        Vec3::ZERO,
        Quat::IDENTITY,
        Vec3::ONE,
        parent,
    )
}

/// Spawn an empty object with an explicit transform.
pub fn object_at(
    scene: &mut Scene,
    name: impl Into<String>,
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    parent: Option<ObjectId>,
) -> ObjectId {
    scene.insert(
        SceneObject::new(name)
            .with_transform(Transform::new(position, rotation, scale))
            .with_parent(parent),
    )
}

/// Spawn an instance of a prefab at the prefab's stored transform.
///
/// The template is cloned; it is never mutated and the scene takes no
/// ownership of it.
pub fn prefab(scene: &mut Scene, prefab: &Prefab, parent: Option<ObjectId>) -> ObjectId {
    prefab_at(
        scene,
        prefab,
        prefab.transform.position,
        prefab.transform.rotation,
        prefab.transform.scale,
        parent,
    )
}

/// Spawn an instance of a prefab with the stored transform overridden.
pub fn prefab_at(
    scene: &mut Scene,
    prefab: &Prefab,
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    parent: Option<ObjectId>,
) -> ObjectId {
    scene.insert(
        SceneObject::new(prefab.name.clone())
            .with_transform(Transform::new(position, rotation, scale))
            .with_parent(parent),
    )
}
