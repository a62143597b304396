// Fixed-step integration of dynamic bodies

use glam::DVec2;

use super::body::DynamicBody;

/// Default downward acceleration, in px/s². Positive y is down.
pub const GRAVITY_ACCEL: f64 = 2000.0;

/// Default cap on downward speed, in px/s.
pub const TERMINAL_VELOCITY: f64 = 900.0;

/// Vertical screen bounds for wrap-around levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapBounds {
    /// Upper screen edge (smaller y).
    pub top: f64,
    /// Lower screen edge (larger y).
    pub bottom: f64,
}

/// Simulation parameters shared by every fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    /// When false, bodies keep whatever acceleration was set on them.
    pub gravity_enabled: bool,
    pub gravity_accel: f64,
    pub terminal_velocity: f64,
    /// Vertical wrap for infinite-fall-loop levels; disabled by default.
    pub wrap: Option<WrapBounds>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            gravity_accel: GRAVITY_ACCEL,
            terminal_velocity: TERMINAL_VELOCITY,
            wrap: None,
        }
    }
}

/// Advance every dynamic body by one fixed timestep.
///
/// Order matters: the pre-step snapshot is taken first because the contact
/// resolver reads it as the body's last known good position when inferring
/// collision direction later in the same step.
pub fn integrate(bodies: &mut [DynamicBody], config: &PhysicsConfig, dt: f64) {
    for body in bodies {
        body.snapshot();

        if config.gravity_enabled {
            // A grounded body gets no gravity; this is what lets it rest on a
            // floor instead of oscillating into it.
            body.acceleration.y = if body.grounded {
                0.0
            } else {
                config.gravity_accel
            };
            body.velocity.y = body.velocity.y.min(config.terminal_velocity);
        }

        body.velocity += body.acceleration * dt;
        body.current.translate(body.velocity * dt);

        if let Some(wrap) = &config.wrap {
            wrap_vertical(body, wrap);
        }
    }
}

/// Teleport a body that left the screen vertically to the opposite edge, so
/// it re-enters moving in the same direction.
fn wrap_vertical(body: &mut DynamicBody, wrap: &WrapBounds) {
    let height = body.current.height();
    if body.current.top() > wrap.bottom {
        let min = body.current.min();
        body.current.set_min(DVec2::new(min.x, wrap.top - height));
    } else if body.current.bottom() < wrap.top {
        let min = body.current.min();
        body.current.set_min(DVec2::new(min.x, wrap.bottom));
    }
}
