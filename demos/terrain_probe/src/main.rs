//! Terrain probe demo.
//!
//! Spawns a row of terrain chunks from a prefab, registers their
//! [`TerrainComponent`]s, then drops a probe object into the scene and
//! asks for the closest chunk. The reported distance is snapped for
//! display and the editor gizmos for the result are recorded.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scene_core::{BehaviourDatabase, Prefab, Scene, TerrainComponent};
use scene_math::{Quat, Transform, Vec3};
use scene_util::{Color, FloatExt, GizmoBuffer, TransformExt, create};

/// Number of terrain chunks spawned along the x axis.
const CHUNK_COUNT: u32 = 8;

/// World-space spacing between chunk centers.
const CHUNK_SPACING: f32 = 4.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("terrain_probe=info".parse()?))
        .init();

    info!("terrain probe starting");

    let mut scene = Scene::new();
    let mut behaviours = BehaviourDatabase::new();

    // A root object to hang the terrain under.
    let terrain_root = create::object(&mut scene, "terrain", None);

    let chunk_prefab = Prefab::new("terrain_chunk")
        .with_transform(Transform::IDENTITY.with_scale(Vec3::new(CHUNK_SPACING, 1.0, CHUNK_SPACING)));

    for chunk in 0..CHUNK_COUNT {
        let id = create::prefab_at(
            &mut scene,
            &chunk_prefab,
            Vec3::new(chunk as f32 * CHUNK_SPACING, 0.0, 0.0),
            Quat::IDENTITY,
            chunk_prefab.transform.scale,
            Some(terrain_root),
        );
        behaviours.register(Box::new(TerrainComponent::new(id, chunk)));
    }
    info!(chunks = CHUNK_COUNT, "terrain spawned");

    // Drop a probe somewhere over the strip.
    let probe = create::object_at(
        &mut scene,
        "probe",
        Vec3::new(13.7, 6.0, 0.5),
        Quat::IDENTITY,
        Vec3::ONE,
        None,
    );
    let probe_transform = scene.get(probe).expect("probe was just spawned").transform;

    let Some(terrain) = probe_transform.closest_terrain_component(&scene, &behaviours) else {
        anyhow::bail!("no terrain registered");
    };
    let terrain_transform = scene
        .get(terrain.object)
        .expect("terrain object is in the scene")
        .transform;

    let distance = probe_transform.distance_to(&terrain_transform);
    info!(
        chunk = terrain.chunk,
        object = %terrain.object,
        distance = distance.round_to_decimals(0.05),
        "closest terrain chunk found"
    );

    // Record the editor gizmos a frame would draw for this result.
    let mut gizmos = GizmoBuffer::new();
    gizmos.sphere_above_with_color(&probe_transform, Color::ORANGE);
    gizmos.outlined_cube(&terrain_transform, Color::BROWN, Color::BLACK);
    gizmos.y_level_line(&terrain_transform, probe_transform.position.y, Color::RED);
    info!(commands = gizmos.len(), "gizmo commands recorded");

    Ok(())
}
