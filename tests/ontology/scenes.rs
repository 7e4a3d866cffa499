//! Integration tests for scenes, cameras, and waypoints

use ylikuutio_foundation::{MasterOf, ParentOf};
use ylikuutio_ontology::{
    BrainStruct, Camera, CameraStruct, Movable, SceneStruct, Universe, UniverseConfig, Waypoint,
    WaypointStruct,
};

use crate::common::{init_logging, scene, universe};

// =============================================================================
// Cameras
// =============================================================================

#[test]
fn new_scene_gets_an_active_default_camera() {
    init_logging();
    let mut universe = Universe::new(UniverseConfig::headless());
    let s = universe.factory().create_scene(SceneStruct::new());

    let cameras = universe.children(s.id(), ParentOf::Cameras);
    assert_eq!(cameras.len(), 1);
    let active = universe.get(s).unwrap().active_camera().unwrap();
    assert_eq!(active.id(), cameras[0]);
}

#[test]
fn default_cameras_can_be_disabled() {
    let mut universe = universe();
    let s = scene(&mut universe);
    assert_eq!(universe.number_of_children(s.id()), 0);
    assert_eq!(universe.get(s).unwrap().active_camera(), None);
}

#[test]
fn moving_the_active_camera_clears_it_in_the_old_scene() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let camera = universe
        .factory()
        .create_camera(CameraStruct::new(s1).looking(1.5, -0.25));
    universe.set_active_camera(s1, Some(camera)).unwrap();

    Camera::bind_to_new_scene_parent(&mut universe, camera, s2).unwrap();

    assert_eq!(universe.get(s1).unwrap().active_camera(), None);
    assert_eq!(universe.get(s2).unwrap().active_camera(), None);
    assert_eq!(universe.get(camera).unwrap().direction(), (1.5, -0.25));
}

#[test]
fn active_camera_must_belong_to_the_scene() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let camera = universe.factory().create_camera(CameraStruct::new(s2));

    let err = universe.set_active_camera(s1, Some(camera)).unwrap_err();
    assert!(err.is_invariant_violation());
    assert_eq!(universe.get(s1).unwrap().active_camera(), None);
}

#[test]
fn camera_follows_brain_of_its_scene() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let brain = universe.factory().create_brain(BrainStruct::new(s));
    let camera = universe.factory().create_camera(CameraStruct::new(s));

    Camera::bind_to_new_brain(&mut universe, camera, brain).unwrap();
    assert_eq!(universe.master(camera.id(), MasterOf::Movables), Some(brain.id()));
}

// =============================================================================
// Waypoints
// =============================================================================

#[test]
fn waypoints_are_movables_of_their_brain() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let brain = universe.factory().create_brain(BrainStruct::new(s1));
    let waypoint = universe.factory().create_waypoint(
        WaypointStruct::new(s1)
            .with_brain(brain)
            .at([4.0, 0.0, -4.0]),
    );
    assert_eq!(
        ylikuutio_ontology::Brain::movables(&universe, brain),
        vec![Movable::Waypoint(waypoint)]
    );

    Waypoint::bind_to_new_scene_parent(&mut universe, waypoint, s2).unwrap();
    assert_eq!(universe.master(waypoint.id(), MasterOf::Movables), None);

    let other = universe.factory().create_brain(BrainStruct::new(s2));
    Waypoint::bind_to_new_brain(&mut universe, waypoint, other).unwrap();
    assert_eq!(universe.master(waypoint.id(), MasterOf::Movables), Some(other.id()));
    assert_eq!(
        universe.get(waypoint).unwrap().cartesian_coordinates(),
        [4.0, 0.0, -4.0]
    );
}

// =============================================================================
// Scene Parameters
// =============================================================================

#[test]
fn scene_parameters_are_kept() {
    let mut universe = universe();
    let s = universe.factory().create_scene(
        SceneStruct::new()
            .with_gravity(1.62)
            .with_water_level(-3.0)
            .with_global_name("moon"),
    );
    let payload = universe.get(s).unwrap();
    assert!((payload.gravity() - 1.62).abs() < f32::EPSILON);
    assert!((payload.water_level() + 3.0).abs() < f32::EPSILON);
    assert_eq!(universe.get_entity("moon"), Some(s.id()));
    assert_eq!(universe.parent(s.id()), Some(universe.root()));
}
