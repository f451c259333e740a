use approx::assert_relative_eq;
use bevy::prelude::*;
use flyer_arcade::{
    components::{
        AircraftState, ChaseCamera, ControlInputs, FlightReadout, PlayerController, PreviousPose,
        RenderPose,
    },
    resources::{FlightTuning, PhysicsConfig},
    FlightSimulator,
};
use std::time::Duration;

use crate::common::{assert_position_eq, full_throttle, test_tuning, TestAppBuilder};

#[test]
fn test_plugin_spawns_one_player_aircraft() {
    let mut app = TestAppBuilder::new().build();
    let world = app.app.world_mut();

    let mut query = world.query_filtered::<(
        &Name,
        &AircraftState,
        &ControlInputs,
        &FlightReadout,
        &PreviousPose,
        &RenderPose,
        &Transform,
    ), With<PlayerController>>();
    let (name, state, controls, _, previous, _, transform) = query
        .get_single(world)
        .expect("expected exactly one player aircraft");

    assert_eq!(name.as_str(), "Aircraft");
    assert!(state.is_grounded());
    assert_eq!(*controls, ControlInputs::neutral());
    assert_eq!(previous.0, state.pose());
    assert_eq!(transform.translation, Vec3::new(0.0, 0.5, 40.0));
}

#[test]
fn test_readout_follows_each_tick() {
    let tuning = test_tuning();
    let mut app = TestAppBuilder::new().build();

    app.fly(full_throttle(), 60);

    let state = app.aircraft().clone();
    let readout = *app.query_single::<FlightReadout>().unwrap();
    assert_eq!(readout, FlightReadout::from_state(&state, &tuning));
    assert!(readout.throttle_percent > 50);
    assert!(readout.speed > 0);
}

#[test]
fn test_fixed_clock_runs_one_tick_per_timestep() {
    let physics = PhysicsConfig::default();
    let mut app = TestAppBuilder::new()
        .with_physics(physics.clone())
        .with_frame_duration(Duration::from_secs_f64(physics.timestep))
        .build();
    app.set_controls(full_throttle());

    for _ in 0..30 {
        app.run_frame();
    }

    let mut sim = FlightSimulator::default();
    for _ in 0..30 {
        sim.tick(&full_throttle());
    }
    assert_eq!(app.aircraft(), sim.state());
}

#[test]
fn test_invalid_tuning_falls_back_to_defaults() {
    let tuning = FlightTuning {
        min_speed: -1.0,
        ..Default::default()
    };
    let app = TestAppBuilder::new().with_tuning(tuning).build();

    assert_eq!(app.get_state::<FlightTuning>(), Some(&FlightTuning::default()));
}

#[test]
fn test_presentation_interpolates_between_ticks() {
    let mut app = TestAppBuilder::new()
        .with_presentation()
        .with_frame_duration(Duration::from_secs_f64(1.0 / 150.0))
        .build();
    app.set_controls(full_throttle());

    for _ in 0..40 {
        app.run_frame();

        let alpha = app.get_state::<Time<Fixed>>().unwrap().overstep_fraction_f64();
        let world = app.app.world_mut();
        let mut query = world.query::<(&AircraftState, &PreviousPose, &RenderPose, &Transform)>();
        let (state, previous, render, transform) = query.get_single(world).unwrap();

        let expected = previous.0.position.lerp(&state.position, alpha);
        assert_position_eq(&render.0.position, &expected, 1e-9);
        assert_relative_eq!(transform.translation.z, expected.z as f32, epsilon = 1e-4);
    }

    assert!(app.aircraft().speed() > 0.0);
}

#[test]
fn test_keyboard_drives_controls() {
    let mut app = TestAppBuilder::new().with_keyboard().build();

    {
        let mut keyboard = app.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.press(KeyCode::ArrowUp);
        keyboard.press(KeyCode::KeyW);
    }
    app.run_frame();

    let controls = *app.query_single::<ControlInputs>().unwrap();
    assert!(controls.throttle_up);
    assert!(controls.pitch_up);
    assert!(!controls.pitch_down);

    app.app
        .world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release_all();
    app.run_frame();
    assert_eq!(
        *app.query_single::<ControlInputs>().unwrap(),
        ControlInputs::neutral()
    );
}

#[test]
fn test_disabled_controller_holds_neutral() {
    let mut app = TestAppBuilder::new().with_keyboard().build();
    app.query_single_mut::<PlayerController>().unwrap().disable();

    app.app
        .world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowUp);
    app.run_frame();

    assert_eq!(
        *app.query_single::<ControlInputs>().unwrap(),
        ControlInputs::neutral()
    );
}

#[test]
fn test_chase_camera_follows_aircraft() {
    let mut app = TestAppBuilder::new().with_chase_camera().build();
    app.run_frame();

    let world = app.app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<ChaseCamera>>();
    let camera = *query.get_single(world).unwrap();

    assert_relative_eq!(camera.translation.x, 0.0, epsilon = 1e-5);
    assert_relative_eq!(camera.translation.y, 2.5, epsilon = 1e-5);
    assert_relative_eq!(camera.translation.z, 50.0, epsilon = 1e-4);

    let to_aircraft = (Vec3::new(0.0, 0.5, 40.0) - camera.translation).normalize();
    assert!(camera.forward().dot(to_aircraft) > 0.9999);
}
