use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use flyer_arcade::{
    components::{AircraftState, ChaseCamera, ControlInputs, PlayerController},
    plugins::{ChaseCameraPlugin, FlightDynamicsPlugin, KeyboardControlPlugin, PresentationSyncPlugin},
    resources::{FlightTuning, PhysicsConfig},
};
use std::time::Duration;

// Builder for a headless app carrying the flight plugins
pub struct TestAppBuilder {
    tuning: FlightTuning,
    physics: PhysicsConfig,
    frame_duration: Duration,
    presentation: bool,
    keyboard: bool,
    chase_camera: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            tuning: FlightTuning::default(),
            physics: PhysicsConfig::default(),
            frame_duration: Duration::ZERO,
            presentation: false,
            keyboard: false,
            chase_camera: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuning(mut self, tuning: FlightTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    /// Virtual time advanced by each `app.update()`. Zero keeps the fixed loop idle.
    pub fn with_frame_duration(mut self, duration: Duration) -> Self {
        self.frame_duration = duration;
        self
    }

    pub fn with_presentation(mut self) -> Self {
        self.presentation = true;
        self
    }

    pub fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }

    /// Adds the presentation plugins and spawns a chase camera entity.
    pub fn with_chase_camera(mut self) -> Self {
        self.presentation = true;
        self.chase_camera = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(self.frame_duration))
            .add_plugins(FlightDynamicsPlugin::new(self.tuning, self.physics));

        if self.presentation {
            app.add_plugins(PresentationSyncPlugin);
        }

        if self.keyboard {
            app.add_plugins((InputPlugin, KeyboardControlPlugin::default()));
        }

        if self.chase_camera {
            app.add_plugins(ChaseCameraPlugin);
            app.world_mut()
                .spawn((Name::new("Chase camera"), ChaseCamera::default(), Transform::default()));
        }

        // Startup spawns the aircraft
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Runs the fixed schedule directly, one tick per call.
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Holds `controls` for `ticks` ticks.
    pub fn fly(&mut self, controls: ControlInputs, ticks: usize) {
        self.set_controls(controls);
        self.run_ticks(ticks);
    }

    /// Ticks until `done` holds or `limit` ticks have run. Returns the ticks run.
    pub fn fly_until<F>(&mut self, controls: ControlInputs, limit: usize, mut done: F) -> usize
    where
        F: FnMut(&AircraftState) -> bool,
    {
        self.set_controls(controls);
        for tick in 0..limit {
            if done(self.aircraft()) {
                return tick;
            }
            self.run_ticks(1);
        }
        limit
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn set_controls(&mut self, controls: ControlInputs) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&mut ControlInputs, With<PlayerController>>();
        if let Ok(mut current) = query.get_single_mut(world) {
            *current = controls;
        }
    }

    pub fn aircraft(&mut self) -> &AircraftState {
        self.query_single::<AircraftState>()
            .expect("aircraft was not spawned")
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
