use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{env, time::Duration};

use flyer_arcade::{
    components::{AircraftState, ControlInputs, FlightReadout, PlayerController},
    plugins::{FlightDynamicsPlugin, FlightSet},
    resources::{FlightTuning, PhysicsConfig},
};

const DEFAULT_TICKS: u64 = 1200;
const TELEMETRY_INTERVAL: u64 = 60;

#[derive(Resource)]
struct FlightPlan {
    ticks: u64,
    elapsed: u64,
}

fn main() -> AppExit {
    let mut tuning = FlightTuning::default();
    let mut ticks = DEFAULT_TICKS;

    for arg in env::args().skip(1) {
        if let Ok(count) = arg.parse::<u64>() {
            ticks = count;
            continue;
        }
        match FlightTuning::from_yaml_file(&arg) {
            Ok(loaded) => tuning = loaded,
            Err(err) => {
                eprintln!("Failed to load tuning from {}: {}", arg, err);
                return AppExit::from_code(1);
            }
        }
    }

    let physics = PhysicsConfig::default();
    let wait = Duration::from_secs_f64(physics.timestep);

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(wait)),
            LogPlugin::default(),
            FlightDynamicsPlugin::new(tuning, physics),
        ))
        .insert_resource(FlightPlan { ticks, elapsed: 0 })
        .add_systems(FixedUpdate, scripted_pilot_system.in_set(FlightSet::Input))
        .add_systems(
            FixedUpdate,
            telemetry_system.after(FlightSet::Readout),
        )
        .run()
}

/// Full throttle, rotate once above rotation speed, then let the nose settle.
fn scripted_pilot_system(
    mut query: Query<(&AircraftState, &mut ControlInputs), With<PlayerController>>,
    tuning: Res<FlightTuning>,
) {
    for (state, mut controls) in query.iter_mut() {
        *controls = ControlInputs {
            throttle_up: true,
            pitch_up: state.is_grounded() && state.speed() > tuning.min_speed,
            ..Default::default()
        };
    }
}

fn telemetry_system(
    query: Query<(&AircraftState, &FlightReadout), With<PlayerController>>,
    mut plan: ResMut<FlightPlan>,
    mut exit: EventWriter<AppExit>,
) {
    plan.elapsed += 1;

    if plan.elapsed % TELEMETRY_INTERVAL == 0 || plan.elapsed >= plan.ticks {
        for (state, readout) in query.iter() {
            let line = serde_json::json!({
                "tick": plan.elapsed,
                "mode": state.mode(),
                "position": [state.position.x, state.position.y, state.position.z],
                "pitch": state.pitch,
                "yaw": state.yaw,
                "roll": state.roll,
                "readout": readout,
            });
            info!("{}", line);
        }
    }

    if plan.elapsed >= plan.ticks {
        info!("Flight plan complete after {} ticks", plan.elapsed);
        exit.send(AppExit::Success);
    }
}
