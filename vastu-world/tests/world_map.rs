//! End-to-end tests for regeneration and detection handling.

mod common;

use std::f32::consts::{FRAC_PI_2, PI};
use std::path::Path;

use approx::assert_relative_eq;
use common::{ScriptedRobot, registry, wall};
use vastu_world::{
    Detection, EntityId, LandmarkId, LocalDelta, MapEntry, ObjectId, ObjectType,
    StructureRegistry, WorldConfig, WorldMap,
};

// ============================================================================
// Structures
// ============================================================================

#[test]
fn test_wall_from_single_marker() {
    env_logger::try_init().ok();

    let mut map = WorldMap::new(registry(vec![wall(100.0, &[(1, 10.0)])]));
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0).sees_landmark(1, 40.0, 0.0, 0.0);

    let result = map.regenerate(&robot, &robot);
    assert_eq!(result.structures_updated, 1);

    let wall = map.structure(LandmarkId(1)).expect("wall inferred");
    assert_eq!(wall.id, LandmarkId(1));
    assert_eq!(wall.length, 100.0);
    assert_relative_eq!(wall.pose.x, 40.0, epsilon = 1e-4);
    assert_relative_eq!(wall.pose.y, -40.0, epsilon = 1e-4);
    assert_relative_eq!(wall.pose.theta, 0.0, epsilon = 1e-6);
}

#[test]
fn test_wall_keyed_by_smallest_landmark() {
    let mut map = WorldMap::new(registry(vec![wall(200.0, &[(9, 20.0), (4, 180.0)])]));
    // Only the larger landmark is visible; the wall is still structure 4
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0).sees_landmark(9, 0.0, 0.0, 0.0);

    map.regenerate(&robot, &robot);
    assert!(map.structure(LandmarkId(4)).is_some());
    assert!(map.get(&EntityId::Structure(LandmarkId(9))).is_none());
}

#[test]
fn test_structures_from_several_walls() {
    let mut map = WorldMap::new(registry(vec![
        wall(100.0, &[(1, 50.0)]),
        wall(100.0, &[(2, 50.0), (3, 0.0)]),
    ]));
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0)
        .sees_landmark(1, 10.0, 10.0, 0.5)
        .sees_landmark(3, -5.0, 0.0, 1.0)
        .sees_landmark(99, 0.0, 0.0, 0.0);

    let result = map.regenerate(&robot, &robot);
    assert_eq!(result.structures_updated, 2);
    assert_eq!(result.landmarks_unregistered, 1);
    assert_eq!(map.structures().count(), 2);

    // Marker at the centre: wall centre is the marker itself
    let first = map.structure(LandmarkId(1)).unwrap();
    assert_relative_eq!(first.pose.x, 10.0, epsilon = 1e-4);
    assert_relative_eq!(first.pose.y, 10.0, epsilon = 1e-4);
    assert_relative_eq!(first.pose.theta, 0.5, epsilon = 1e-6);

    // Marker at the start: centre is 50 along orientation - π/2
    let second = map.structure(LandmarkId(2)).unwrap();
    assert_relative_eq!(second.pose.x, -5.0 + 50.0 * (1.0_f32 - FRAC_PI_2).cos(), epsilon = 1e-3);
    assert_relative_eq!(second.pose.y, 50.0 * (1.0_f32 - FRAC_PI_2).sin(), epsilon = 1e-3);
}

#[test]
fn test_unregistered_landmarks_never_create_structures() {
    let mut map = WorldMap::new(registry(vec![wall(100.0, &[(1, 10.0)])]));
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0)
        .sees_landmark(50, 1.0, 2.0, 0.0)
        .sees_landmark(51, 3.0, 4.0, 0.0);

    let result = map.regenerate(&robot, &robot);
    assert_eq!(result.landmarks_unregistered, 2);
    assert_eq!(result.structures_updated, 0);
    assert!(map.is_empty());
}

#[test]
fn test_regeneration_keeps_stale_structures() {
    let mut map = WorldMap::new(registry(vec![
        wall(100.0, &[(1, 10.0)]),
        wall(100.0, &[(2, 10.0)]),
    ]));

    let first = ScriptedRobot::at(0.0, 0.0, 0.0)
        .sees_landmark(1, 40.0, 0.0, 0.0)
        .sees_landmark(2, 0.0, 40.0, FRAC_PI_2);
    map.regenerate(&first, &first);
    let before = map.structure(LandmarkId(2)).cloned().unwrap();

    // Landmark 2 is gone; its wall must survive untouched
    let second = ScriptedRobot::at(5.0, 5.0, 1.0).sees_landmark(1, 45.0, 0.0, 0.0);
    map.regenerate(&second, &second);

    assert_eq!(map.structure(LandmarkId(2)), Some(&before));
    assert_relative_eq!(map.structure(LandmarkId(1)).unwrap().pose.x, 45.0, epsilon = 1e-4);
}

#[test]
fn test_regeneration_overwrites_structures() {
    let mut map = WorldMap::new(registry(vec![wall(100.0, &[(1, 50.0)])]));

    let robot = ScriptedRobot::at(0.0, 0.0, 0.0).sees_landmark(1, 0.0, 0.0, 0.0);
    map.regenerate(&robot, &robot);
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0).sees_landmark(1, 7.0, 8.0, PI / 4.0);
    map.regenerate(&robot, &robot);

    let wall = map.structure(LandmarkId(1)).unwrap();
    assert_relative_eq!(wall.pose.x, 7.0, epsilon = 1e-4);
    assert_relative_eq!(wall.pose.y, 8.0, epsilon = 1e-4);
    assert_relative_eq!(wall.pose.theta, PI / 4.0, epsilon = 1e-6);
    assert_eq!(map.len(), 1);
}

// ============================================================================
// Light cubes
// ============================================================================

#[test]
fn test_light_cube_world_pose() {
    let mut map = WorldMap::new(registry(vec![]));
    let robot = ScriptedRobot::at(0.0, 0.0, FRAC_PI_2).sees_cube(1, 10.0, 0.0, 0.0);

    map.regenerate(&robot, &robot);

    let cube = map
        .get(&EntityId::Object(ObjectId(1)))
        .and_then(MapEntry::as_movable)
        .unwrap();
    assert_relative_eq!(cube.pose.x, 0.0, epsilon = 1e-4);
    assert_relative_eq!(cube.pose.y, 10.0, epsilon = 1e-4);
    assert_relative_eq!(cube.pose.theta, FRAC_PI_2, epsilon = 1e-6);
}

#[test]
fn test_invalid_cube_pose_leaves_old_entry() {
    let mut map = WorldMap::new(registry(vec![]));
    let seen = ScriptedRobot::at(0.0, 0.0, 0.0).sees_cube(3, 20.0, 0.0, 0.0);
    map.regenerate(&seen, &seen);

    let lost = ScriptedRobot::at(100.0, 0.0, 0.0).lost_cube(3);
    let result = map.regenerate(&lost, &lost);
    assert_eq!(result.objects_skipped, 1);
    assert_eq!(result.objects_updated, 0);

    let cube = map.get(&EntityId::Object(ObjectId(3))).unwrap();
    assert_relative_eq!(cube.pose().x, 20.0, epsilon = 1e-4);
}

#[test]
fn test_light_cube_detection_events_ignored() {
    let mut map = WorldMap::new(registry(vec![]));
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0);

    let detection = Detection::light_cube("LightCube1", LocalDelta::planar(5.0, 5.0, 0.0));
    assert!(!map.handle_observation(&detection, &robot));
    assert!(map.is_empty());
}

// ============================================================================
// Custom objects
// ============================================================================

#[test]
fn test_custom_object_second_pose_wins() {
    let mut map = WorldMap::new(registry(vec![]));
    let robot = ScriptedRobot::at(10.0, 0.0, 0.0);

    map.handle_observation(&Detection::custom("Box", LocalDelta::planar(5.0, 0.0, 0.0)), &robot);
    map.handle_observation(&Detection::custom("Box", LocalDelta::planar(0.0, 5.0, 0.2)), &robot);

    assert_eq!(map.len(), 1);
    let entry = map.get(&EntityId::ObjectType(ObjectType::new("Box"))).unwrap();
    assert_relative_eq!(entry.pose().x, 10.0, epsilon = 1e-4);
    assert_relative_eq!(entry.pose().y, 5.0, epsilon = 1e-4);
    assert_relative_eq!(entry.pose().theta, 0.2, epsilon = 1e-6);
}

#[test]
fn test_custom_types_get_separate_slots() {
    let mut map = WorldMap::new(registry(vec![]));
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0);

    map.handle_observation(&Detection::custom("Box", LocalDelta::planar(1.0, 0.0, 0.0)), &robot);
    map.handle_observation(&Detection::custom("Ramp", LocalDelta::planar(2.0, 0.0, 0.0)), &robot);
    let invalid = Detection::custom("Box", LocalDelta::default()).without_pose();
    assert!(!map.handle_observation(&invalid, &robot));

    assert_eq!(map.movable_objects().count(), 2);
    let boxed = map.get(&EntityId::ObjectType(ObjectType::new("Box"))).unwrap();
    assert_relative_eq!(boxed.pose().x, 1.0, epsilon = 1e-4);
}

#[test]
fn test_keyspaces_stay_apart() {
    let mut map = WorldMap::new(registry(vec![wall(100.0, &[(7, 50.0)])]));
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0)
        .sees_landmark(7, 0.0, 0.0, 0.0)
        .sees_cube(7, 30.0, 0.0, 0.0);

    map.regenerate(&robot, &robot);
    map.handle_observation(&Detection::custom("7", LocalDelta::planar(60.0, 0.0, 0.0)), &robot);

    assert_eq!(map.len(), 3);
    assert!(map.structure(LandmarkId(7)).is_some());
    assert!(map.get(&EntityId::Object(ObjectId(7))).is_some());
    assert!(map.get(&EntityId::ObjectType(ObjectType::new("7"))).is_some());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_shipped_config_builds_map() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/world.yaml");
    let mut map = WorldConfig::load_map(&path).expect("shipped config is valid");
    assert_eq!(map.registry().len(), 3);

    // Marker 38 sits 525 along the 600-long north wall
    let robot = ScriptedRobot::at(0.0, 0.0, 0.0).sees_landmark(38, 0.0, 0.0, 0.0);
    map.regenerate(&robot, &robot);

    let north = map.structure(LandmarkId(37)).unwrap();
    assert_relative_eq!(north.pose.y, 225.0, epsilon = 1e-3);
    assert_eq!(north.doorways.len(), 1);
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.yaml");

    let yaml = "structures:\n  - length: 80.0\n    markers:\n      3: { facing: \"+\", offset: 0.0 }\n";
    std::fs::write(&path, yaml).unwrap();

    let config = WorldConfig::load(&path).unwrap();
    let registry: StructureRegistry = config.build_registry().unwrap();
    assert_eq!(registry.lookup(LandmarkId(3)).unwrap().length(), 80.0);

    assert!(WorldConfig::load(&dir.path().join("missing.yaml")).is_err());
}
