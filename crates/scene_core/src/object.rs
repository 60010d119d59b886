//! Object identifiers and the scene object record.
//!
//! An [`ObjectId`] is a lightweight `u64` identifier. Ids are handed out
//! by [`ObjectAllocator`] in ascending order, so iterating a collection
//! keyed by id visits objects in the order they were spawned.

use scene_math::Transform;
use serde::{Deserialize, Serialize};

/// A unique scene object identifier.
///
/// Ids are pure identifiers. The object's data lives in the
/// [`Scene`](crate::Scene) and behaviours attach to it through the
/// [`BehaviourDatabase`](crate::BehaviourDatabase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// The null / invalid object sentinel.
    pub const INVALID: ObjectId = ObjectId(0);

    /// Create an object id from a raw `u64`.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is a valid (non-zero) id.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// Allocates monotonically increasing object ids.
///
/// Ids are never reused; ascending ids are what keeps scene iteration in
/// spawn order.
#[derive(Debug)]
pub struct ObjectAllocator {
    next_id: u64,
}

impl ObjectAllocator {
    /// Creates a new allocator. Ids start at 1 (0 is reserved for [`ObjectId::INVALID`]).
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocates a fresh object id.
    pub fn allocate(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        ObjectId(id)
    }

    /// Returns the number of ids allocated so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for ObjectAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A single object in the scene: a name, a transform, and an optional
/// parent link.
///
/// The parent link is plain bookkeeping; transforms stay world-space and
/// are not re-derived from the parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneObject {
    /// Display name, used in diagnostics.
    pub name: String,
    /// World-space transform.
    pub transform: Transform,
    /// Optional parent object.
    pub parent: Option<ObjectId>,
}

impl SceneObject {
    /// Create an object with the identity transform and no parent.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            parent: None,
        }
    }

    /// Replace the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the parent link.
    #[must_use]
    pub fn with_parent(mut self, parent: Option<ObjectId>) -> Self {
        self.parent = parent;
        self
    }
}
