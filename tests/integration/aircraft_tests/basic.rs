use approx::assert_relative_eq;
use flyer_arcade::{
    components::{ControlIntent, FlightReadout},
    resources::{AttitudeModel, FlightTuning, PhysicsConfig},
    systems::step_aircraft,
    FlightSimulator,
};
use pretty_assertions::assert_eq;

use crate::common::{
    assert_grounded_invariants, assert_state_valid, cruising_state, full_throttle, hold, idle,
    rotate, take_off, test_tuning, TestAppBuilder,
};

#[test]
fn test_start_state() {
    let mut app = TestAppBuilder::new().build();
    let tuning = test_tuning();

    let state = app.aircraft().clone();
    assert_grounded_invariants(&state, &tuning);
    assert_eq!(state.position.z, 40.0);
    assert_eq!(state.speed(), 0.0);

    let readout = app.query_single::<FlightReadout>().copied();
    assert_eq!(
        readout,
        Some(FlightReadout {
            speed: 0,
            altitude: 1,
            throttle_percent: 0
        })
    );
}

#[test]
fn test_thrust_and_speed_stay_in_bounds() {
    let tuning = test_tuning();
    let mut sim = FlightSimulator::default();

    let script = [
        (full_throttle(), 400),
        (rotate(), 150),
        (hold(&[ControlIntent::ThrottleDown, ControlIntent::RollLeft]), 200),
        (hold(&[ControlIntent::ThrottleUp, ControlIntent::PitchDown]), 200),
        (idle(), 400),
    ];

    for (controls, ticks) in script {
        for _ in 0..ticks {
            sim.tick(&controls);
            assert_state_valid(sim.state(), &tuning);
        }
    }
}

#[test]
fn test_grounded_aircraft_stays_pinned() {
    let tuning = test_tuning();
    let mut app = TestAppBuilder::new().build();

    // Taxi with steering but no rotation.
    let taxi = hold(&[ControlIntent::ThrottleUp, ControlIntent::YawLeft]);
    app.set_controls(taxi);
    for _ in 0..300 {
        app.run_ticks(1);
        let state = app.aircraft().clone();
        assert_grounded_invariants(&state, &tuning);
    }
    assert!(app.aircraft().yaw < 0.0);
}

#[test]
fn test_throttle_up_converges_on_max_thrust() {
    let tuning = test_tuning();
    let mut sim = FlightSimulator::default();
    let mut last = 0.0;

    for _ in 0..500 {
        sim.tick(&full_throttle());
        let thrust = sim.state().thrust();
        assert!(thrust >= last, "thrust dropped from {} to {}", last, thrust);
        assert!(thrust <= tuning.max_thrust);
        last = thrust;
    }

    assert!(last > 0.0145, "thrust only reached {}", last);
    assert_eq!(sim.readout().throttle_percent, 100);
}

#[test]
fn test_idle_rollout_decelerates() {
    let mut sim = FlightSimulator::default();
    for _ in 0..100 {
        sim.tick(&full_throttle());
    }
    let close = hold(&[ControlIntent::ThrottleDown]);
    while sim.state().thrust() > 0.0 {
        sim.tick(&close);
    }

    let mut last = sim.state().horizontal_speed();
    assert!(last > 0.0);
    for _ in 0..300 {
        sim.tick(&idle());
        let speed = sim.state().horizontal_speed();
        assert!(speed < last, "horizontal speed rose from {} to {}", last, speed);
        last = speed;
    }
}

#[test]
fn test_idle_flight_decelerates_horizontally() {
    let tuning = test_tuning();
    let mut state = cruising_state(400.0, 1.5);
    let mut last = state.horizontal_speed();

    for _ in 0..300 {
        step_aircraft(&mut state, &idle(), &tuning);
        let speed = state.horizontal_speed();
        assert!(speed < last);
        last = speed;
    }
}

#[test]
fn test_identical_inputs_give_identical_runs() {
    let script = |sim: &mut FlightSimulator| {
        take_off(sim, 400);
        for tick in 0..600 {
            let controls = match tick % 120 {
                0..=30 => hold(&[ControlIntent::RollRight, ControlIntent::ThrottleUp]),
                31..=60 => hold(&[ControlIntent::PitchDown]),
                61..=90 => hold(&[ControlIntent::YawLeft, ControlIntent::ThrottleDown]),
                _ => idle(),
            };
            sim.tick(&controls);
        }
    };

    let mut a = FlightSimulator::default();
    let mut b = FlightSimulator::default();
    script(&mut a);
    script(&mut b);

    assert_eq!(a.state(), b.state());
    assert_eq!(a.readout(), b.readout());
}

#[test]
fn test_app_matches_simulator() {
    let mut app = TestAppBuilder::new().build();
    let mut sim = FlightSimulator::default();

    app.fly(full_throttle(), 120);
    for _ in 0..120 {
        sim.tick(&full_throttle());
    }

    assert_eq!(app.aircraft(), sim.state());
}

#[test]
fn test_incremental_attitude_model_flies() {
    let tuning = FlightTuning::default().with_attitude_model(AttitudeModel::Incremental);
    let mut sim = FlightSimulator::new(tuning.clone(), PhysicsConfig::default());

    let liftoff = take_off(&mut sim, 400);
    assert!(liftoff.is_some());

    for tick in 0..600 {
        let controls = if tick < 200 {
            hold(&[ControlIntent::ThrottleUp, ControlIntent::RollLeft])
        } else {
            full_throttle()
        };
        sim.tick(&controls);
        assert_state_valid(sim.state(), &tuning);
    }
    assert_relative_eq!(sim.state().attitude.quaternion().norm(), 1.0, epsilon = 1e-12);
}
