//! Scene storage.
//!
//! The [`Scene`] owns every live [`SceneObject`], keyed by [`ObjectId`].
//! Storage is ordered by id, and ids are allocated in ascending order, so
//! iteration always visits objects in the order they were spawned.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::object::{ObjectAllocator, ObjectId, SceneObject};

/// Errors returned by fallible scene operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The referenced object does not exist in the scene.
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    /// An object cannot be its own parent.
    #[error("object {0} cannot be parented to itself")]
    SelfParent(ObjectId),
}

/// Object storage for one scene.
#[derive(Debug)]
pub struct Scene {
    allocator: ObjectAllocator,
    objects: BTreeMap<ObjectId, SceneObject>,
}

impl Scene {
    /// Create a new empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: ObjectAllocator::new(),
            objects: BTreeMap::new(),
        }
    }

    /// Insert an object into the scene, allocating a fresh id for it.
    pub fn insert(&mut self, object: SceneObject) -> ObjectId {
        let id = self.allocator.allocate();
        self.objects.insert(id, object);
        id
    }

    /// Remove an object from the scene.
    ///
    /// Returns `true` if the object existed and was removed. Children keep
    /// their (now dangling) parent link; callers that care re-parent first.
    pub fn despawn(&mut self, id: ObjectId) -> bool {
        self.objects.remove(&id).is_some()
    }

    /// Returns a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Returns a mutable reference to an object by id.
    #[must_use]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Returns `true` if the object exists.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Re-parent an object.
    ///
    /// Passing `None` clears the link.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::ObjectNotFound`] if either end of the link is
    /// missing, or [`SceneError::SelfParent`] when `parent == id`.
    pub fn set_parent(&mut self, id: ObjectId, parent: Option<ObjectId>) -> Result<(), SceneError> {
        if let Some(p) = parent {
            if p == id {
                return Err(SceneError::SelfParent(id));
            }
            if !self.objects.contains_key(&p) {
                return Err(SceneError::ObjectNotFound(p));
            }
        }
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(SceneError::ObjectNotFound(id))?;
        object.parent = parent;
        Ok(())
    }

    /// Returns an iterator over all objects in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, obj)| (*id, obj))
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
