// Fixed timestep scheduling and frame-time decoupling
//
// Variable presentation frame time is banked into an accumulator and drained
// in whole fixed increments, so physics advances at a constant rate no matter
// how fast the display refreshes.

use super::body::TriggerEvent;
use super::collision::detect;
use super::integrator::{integrate, PhysicsConfig};
use super::resolver::resolve;
use super::world::World;

/// Simulation rate: 60 fixed steps per second.
pub const FIXED_TIMESTEP: f64 = 1.0 / 60.0;

/// Upper bound on the frame time fed to the accumulator. Caps worst-case
/// catch-up work after a stall so a long frame cannot trigger a spiral of
/// death.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Drives integrate -> detect -> resolve once per accumulated fixed step.
///
/// Owns the accumulator and the interpolation alpha; the presentation layer
/// calls [`on_frame`](Self::on_frame) once per display refresh and reads
/// [`alpha`](Self::alpha) afterwards to blend body positions.
#[derive(Debug)]
pub struct StepScheduler {
    config: PhysicsConfig,
    /// Banked simulation time, in seconds.
    accumulator: f64,
    /// Timestamp of the previous frame, in seconds.
    last_time: Option<f64>,
    /// Leftover fractional step after the last drain.
    alpha: f64,
    step_count: u64,
}

impl StepScheduler {
    /// Create a scheduler with the given simulation parameters.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            last_time: None,
            alpha: 0.0,
            step_count: 0,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance the world for one presentation frame.
    ///
    /// `now_ms` is the caller's clock in milliseconds; the first call only
    /// establishes the baseline and runs no steps. Returns every trigger
    /// event fired by the fixed steps executed this frame, in order. Events
    /// are not deduplicated: a body sitting inside a trigger volume fires it
    /// once per overlapping step.
    pub fn on_frame(&mut self, world: &mut World, now_ms: f64) -> Vec<TriggerEvent> {
        let now = now_ms / 1000.0;
        let frame_time = match self.last_time {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_time = Some(now);

        let clamped = frame_time.min(MAX_FRAME_TIME);
        if clamped < frame_time {
            log::debug!(
                "frame time {:.3}s clamped to {:.3}s",
                frame_time,
                MAX_FRAME_TIME
            );
        }
        self.accumulator += clamped;

        let mut events = Vec::new();
        while self.accumulator >= FIXED_TIMESTEP {
            events.extend(self.step(world, FIXED_TIMESTEP));
            self.accumulator -= FIXED_TIMESTEP;
        }

        self.alpha = self.accumulator / FIXED_TIMESTEP;
        events
    }

    /// Run exactly one fixed step, bypassing the accumulator.
    pub fn step_once(&mut self, world: &mut World) -> Vec<TriggerEvent> {
        self.step(world, FIXED_TIMESTEP)
    }

    fn step(&mut self, world: &mut World, dt: f64) -> Vec<TriggerEvent> {
        integrate(&mut world.dynamics, &self.config, dt);
        let (contacts, events) = detect(world);
        resolve(world, &contacts);
        self.step_count += 1;
        events
    }

    /// Leftover fractional step time from the last frame, in `[0, 1)`.
    /// Feed it to [`World::interpolated_position`] for smooth rendering.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Total fixed steps executed.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Zero the accumulator and drop the frame-time baseline. Call alongside
    /// [`World::purge_all`] when tearing down a scene, so the next scene does
    /// not start with an update burst.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
        self.alpha = 0.0;
    }
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}
