//! Prefabs and setup assets.
//!
//! A [`Prefab`] is a reusable object template: a name and the transform an
//! instance starts with. A [`SetupAsset`] pairs a prefab with the string
//! id game code uses to pull it out of an asset pool.

use scene_math::Transform;
use serde::{Deserialize, Serialize};

/// A reusable object template.
///
/// Instantiation clones the template; the prefab itself is never mutated
/// and never owned by a scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prefab {
    /// Name given to instances of this prefab.
    pub name: String,
    /// The transform an instance starts with, unless overridden at
    /// instantiation time.
    pub transform: Transform,
}

impl Prefab {
    /// Create a prefab with the identity transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
        }
    }

    /// Replace the template transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// An asset pool entry: a prefab keyed by a string id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetupAsset {
    /// Lookup id, unique within its pool by convention.
    pub id: String,
    /// The prefab this asset instantiates.
    pub prefab: Prefab,
}

impl SetupAsset {
    /// Create a setup asset.
    #[must_use]
    pub fn new(id: impl Into<String>, prefab: Prefab) -> Self {
        Self {
            id: id.into(),
            prefab,
        }
    }
}
