//! Behaviour registry.
//!
//! Game code attaches behaviours to scene objects through a
//! [`BehaviourDatabase`] it owns and populates itself. The database maps
//! each object to its behaviours and is ordered by object id, so scans
//! visit objects in spawn order.
//!
//! Behaviours are looked up by concrete type via [`std::any::Any`]
//! downcasting; there is no type-id scheme or query layer here.

use std::any::Any;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::object::ObjectId;

/// A behaviour bound to one scene object.
pub trait Behaviour: Send + Sync + 'static {
    /// The object this behaviour is attached to.
    fn object(&self) -> ObjectId;

    /// Upcast for downcasting to the concrete behaviour type.
    fn as_any(&self) -> &dyn Any;
}

/// Registry of behaviours, keyed by the object they attach to.
///
/// Owned and populated by game code; the helper functions only read it.
#[derive(Default)]
pub struct BehaviourDatabase {
    behaviours: BTreeMap<ObjectId, Vec<Box<dyn Behaviour>>>,
}

impl BehaviourDatabase {
    /// Create a new empty database.
    #[must_use]
    pub fn new() -> Self {
        Self {
            behaviours: BTreeMap::new(),
        }
    }

    /// Register a behaviour under the object it reports via
    /// [`Behaviour::object`].
    pub fn register(&mut self, behaviour: Box<dyn Behaviour>) {
        self.behaviours
            .entry(behaviour.object())
            .or_default()
            .push(behaviour);
    }

    /// Remove every behaviour attached to an object.
    ///
    /// Returns `true` if the object had any behaviours registered.
    pub fn remove_object(&mut self, object: ObjectId) -> bool {
        self.behaviours.remove(&object).is_some()
    }

    /// Returns the first behaviour of type `T` attached to an object.
    #[must_use]
    pub fn get<T: Behaviour>(&self, object: ObjectId) -> Option<&T> {
        self.behaviours
            .get(&object)?
            .iter()
            .find_map(|b| b.as_any().downcast_ref::<T>())
    }

    /// Returns `true` if the object has a behaviour of type `T`.
    #[must_use]
    pub fn has<T: Behaviour>(&self, object: ObjectId) -> bool {
        self.get::<T>(object).is_some()
    }

    /// Returns an iterator over all objects with registered behaviours,
    /// in id (spawn) order.
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.behaviours.keys().copied()
    }

    /// Returns the total number of registered behaviours.
    #[must_use]
    pub fn behaviour_count(&self) -> usize {
        self.behaviours.values().map(Vec::len).sum()
    }

    /// Returns the number of objects with at least one behaviour.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.behaviours.len()
    }
}

impl std::fmt::Debug for BehaviourDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviourDatabase")
            .field("objects", &self.behaviours.len())
            .field("behaviours", &self.behaviour_count())
            .finish()
    }
}

/// Behaviour marking a scene object as a terrain chunk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TerrainComponent {
    /// The terrain object.
    pub object: ObjectId,
    /// Chunk index within the terrain grid.
    pub chunk: u32,
}

impl TerrainComponent {
    /// Create a terrain component for an object.
    #[must_use]
    pub fn new(object: ObjectId, chunk: u32) -> Self {
        Self { object, chunk }
    }
}

impl Behaviour for TerrainComponent {
    fn object(&self) -> ObjectId {
        self.object
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
