//! Extension traits.
//!
//! Small additions to existing types, written as traits so they stay on
//! exactly the type they are meant for: asset-pool lookup on
//! `[SetupAsset]`, snapping on `f32`, and the nearest-terrain search on
//! [`Transform`].

use scene_core::{BehaviourDatabase, Scene, SetupAsset, TerrainComponent};
use scene_math::Transform;
use tracing::error;

/// Default threshold below which [`FloatExt::round_to_decimals`] leaves
/// values untouched.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.1;

/// Lookup by string id on a pool of setup assets.
pub trait AssetSliceExt {
    /// Returns the first asset with the given id, or `None`.
    fn find_by_id(&self, id: &str) -> Option<&SetupAsset>;
}

impl AssetSliceExt for [SetupAsset] {
    fn find_by_id(&self, id: &str) -> Option<&SetupAsset> {
        self.iter().find(|asset| asset.id == id)
    }
}

/// Snapping helpers for `f32`.
pub trait FloatExt {
    /// Snap down to the nearest multiple of `precision`, using
    /// [`DEFAULT_SNAP_THRESHOLD`].
    ///
    /// Values at or below the threshold are returned unchanged; values
    /// above it become the greatest multiple of `precision` not exceeding
    /// the input. `precision` must be positive.
    #[must_use]
    fn round_to_decimals(self, precision: f32) -> f32;

    /// Snap down to the nearest multiple of `precision` with an explicit
    /// threshold.
    #[must_use]
    fn round_to_decimals_above(self, precision: f32, threshold: f32) -> f32;
}

impl FloatExt for f32 {
    fn round_to_decimals(self, precision: f32) -> f32 {
        self.round_to_decimals_above(precision, DEFAULT_SNAP_THRESHOLD)
    }

    fn round_to_decimals_above(self, precision: f32, threshold: f32) -> f32 {
        if self > threshold {
            (self / precision).floor() * precision
        } else {
            self
        }
    }
}

/// Spatial queries anchored at a transform.
pub trait TransformExt {
    /// Returns the terrain component closest to this transform's position.
    ///
    /// Linear scan over the behaviour database in spawn order; the
    /// strictly smallest distance wins, so ties keep the first-encountered
    /// terrain. Registered terrain whose object is no longer in the scene
    /// is skipped.
    ///
    /// Returns `None` (after logging a diagnostic) when the database
    /// holds no reachable terrain. Absence is an expected outcome, not a
    /// failure.
    #[must_use]
    fn closest_terrain_component<'a>(
        &self,
        scene: &Scene,
        behaviours: &'a BehaviourDatabase,
    ) -> Option<&'a TerrainComponent>;
}

impl TransformExt for Transform {
    fn closest_terrain_component<'a>(
        &self,
        scene: &Scene,
        behaviours: &'a BehaviourDatabase,
    ) -> Option<&'a TerrainComponent> {
        let mut closest: Option<&TerrainComponent> = None;
        let mut min_distance = f32::INFINITY;

        for object in behaviours.objects() {
            let Some(terrain) = behaviours.get::<TerrainComponent>(object) else {
                continue;
            };
            let Some(terrain_object) = scene.get(object) else {
                continue;
            };

            let distance = terrain_object.transform.position.distance(self.position);
            if distance < min_distance {
                closest = Some(terrain);
                min_distance = distance;
            }
        }

        if closest.is_none() {
            error!(
                position = ?self.position,
                "failed to find a terrain component near the query position"
            );
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_core::{ObjectId, Prefab, SceneObject};
    use scene_math::{Transform, Vec3};

    fn pool() -> Vec<SetupAsset> {
        vec![
            SetupAsset::new("tree_small", Prefab::new("tree")),
            SetupAsset::new("rock_mossy", Prefab::new("rock")),
            SetupAsset::new("tree_large", Prefab::new("tree")),
        ]
    }

    #[test]
    fn test_find_by_id_hits() {
        let assets = pool();
        let found = assets.find_by_id("rock_mossy").unwrap();
        assert_eq!(found.prefab.name, "rock");
    }

    #[test]
    fn test_find_by_id_misses() {
        let assets = pool();
        assert!(assets.find_by_id("bush").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let mut assets = pool();
        assets.push(SetupAsset::new("tree_small", Prefab::new("imposter")));
        assert_eq!(assets.find_by_id("tree_small").unwrap().prefab.name, "tree");
    }

    #[test]
    fn test_round_leaves_small_values_unchanged() {
        assert_eq!(0.05_f32.round_to_decimals(0.25), 0.05);
        assert_eq!(0.1_f32.round_to_decimals(0.25), 0.1);
        assert_eq!((-3.7_f32).round_to_decimals(0.25), -3.7);
    }

    #[test]
    fn test_round_snaps_down_above_threshold() {
        assert_eq!(0.3_f32.round_to_decimals(0.25), 0.25);
        assert_eq!(1.99_f32.round_to_decimals(0.5), 1.5);
        assert_eq!(2.0_f32.round_to_decimals(0.5), 2.0);
    }

    #[test]
    fn test_round_with_explicit_threshold() {
        // Below the custom threshold: untouched.
        assert_eq!(4.9_f32.round_to_decimals_above(2.0, 5.0), 4.9);
        // Above it: floor quantisation.
        assert_eq!(5.1_f32.round_to_decimals_above(2.0, 5.0), 4.0);
    }

    fn terrain_scene(positions: &[Vec3]) -> (Scene, BehaviourDatabase, Vec<ObjectId>) {
        let mut scene = Scene::new();
        let mut db = BehaviourDatabase::new();
        let mut ids = Vec::new();
        for (chunk, pos) in positions.iter().enumerate() {
            let id = scene.insert(
                SceneObject::new(format!("terrain_{chunk}"))
                    .with_transform(Transform::from_position(*pos)),
            );
            db.register(Box::new(TerrainComponent::new(id, chunk as u32)));
            ids.push(id);
        }
        (scene, db, ids)
    }

    #[test]
    fn test_closest_terrain_empty_database() {
        let scene = Scene::new();
        let db = BehaviourDatabase::new();
        let probe = Transform::from_position(Vec3::ZERO);
        assert!(probe.closest_terrain_component(&scene, &db).is_none());
    }

    #[test]
    fn test_closest_terrain_picks_minimum_distance() {
        let (scene, db, ids) = terrain_scene(&[
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
        ]);
        let probe = Transform::from_position(Vec3::ZERO);

        let terrain = probe.closest_terrain_component(&scene, &db).unwrap();
        assert_eq!(terrain.object, ids[1]);
        assert_eq!(terrain.chunk, 1);
    }

    #[test]
    fn test_closest_terrain_tie_keeps_first_spawned() {
        let (scene, db, ids) = terrain_scene(&[
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(-3.0, 0.0, 0.0),
        ]);
        let probe = Transform::from_position(Vec3::ZERO);

        let terrain = probe.closest_terrain_component(&scene, &db).unwrap();
        assert_eq!(terrain.object, ids[0]);
    }

    #[test]
    fn test_closest_terrain_skips_despawned_objects() {
        let (mut scene, db, ids) = terrain_scene(&[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
        ]);
        scene.despawn(ids[0]);
        let probe = Transform::from_position(Vec3::ZERO);

        let terrain = probe.closest_terrain_component(&scene, &db).unwrap();
        assert_eq!(terrain.object, ids[1]);
    }

    #[test]
    fn test_closest_terrain_ignores_other_behaviours() {
        use std::any::Any;

        struct Waypoint {
            object: ObjectId,
        }
        impl scene_core::Behaviour for Waypoint {
            fn object(&self) -> ObjectId {
                self.object
            }
            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        let mut scene = Scene::new();
        let mut db = BehaviourDatabase::new();
        let id = scene.insert(SceneObject::new("marker"));
        db.register(Box::new(Waypoint { object: id }));

        let probe = Transform::from_position(Vec3::ZERO);
        assert!(probe.closest_terrain_component(&scene, &db).is_none());
    }
}
