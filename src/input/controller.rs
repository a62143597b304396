// Player controller: writes movement intents onto one dynamic body

use super::intent::{Intent, IntentState};
use crate::physics::{DynamicBodyHandle, World};

/// Default horizontal speed, in px/s.
pub const MOVE_SPEED: f64 = 220.0;

/// Default upward jump speed, in px/s.
pub const JUMP_SPEED: f64 = 650.0;

/// Default number of jumps before the body must touch ground again.
pub const MAX_JUMPS: u8 = 2;

/// Translates intent state into velocity writes on a single dynamic body.
///
/// Horizontal velocity comes from the mutually exclusive left/right flags
/// (both held, or neither, means zero). Jumping is gated on the body's
/// grounded flag: landing refills the jump budget, and each consumed Jump
/// edge spends one jump while any remain, which is what allows the double
/// jump mid-air.
#[derive(Debug)]
pub struct PlayerController {
    body: DynamicBodyHandle,
    move_speed: f64,
    jump_speed: f64,
    max_jumps: u8,
    jumps_remaining: u8,
}

impl PlayerController {
    /// Create a controller with the default tuning.
    pub fn new(body: DynamicBodyHandle) -> Self {
        Self::with_tuning(body, MOVE_SPEED, JUMP_SPEED, MAX_JUMPS)
    }

    /// Create a controller with explicit speeds and jump budget.
    pub fn with_tuning(
        body: DynamicBodyHandle,
        move_speed: f64,
        jump_speed: f64,
        max_jumps: u8,
    ) -> Self {
        Self {
            body,
            move_speed,
            jump_speed,
            max_jumps,
            jumps_remaining: max_jumps,
        }
    }

    pub fn body(&self) -> DynamicBodyHandle {
        self.body
    }

    pub fn jumps_remaining(&self) -> u8 {
        self.jumps_remaining
    }

    /// Apply the current intents to the body. Call once per fixed step,
    /// before the scheduler advances the world.
    pub fn apply(&mut self, world: &mut World, input: &mut IntentState) {
        let Some(body) = world.dynamic_mut(self.body) else {
            return;
        };

        if body.grounded() {
            self.jumps_remaining = self.max_jumps;
        }

        let left = input.is_pressed(Intent::MoveLeft);
        let right = input.is_pressed(Intent::MoveRight);
        let mut velocity = body.velocity();
        velocity.x = if left && !right {
            -self.move_speed
        } else if right && !left {
            self.move_speed
        } else {
            0.0
        };

        if input.consume_just_pressed(Intent::Jump) && self.jumps_remaining > 0 {
            velocity.y = -self.jump_speed;
            self.jumps_remaining -= 1;
        }

        body.set_velocity(velocity);
    }
}
