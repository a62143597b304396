// Body types: dynamic (simulated), static (solid footprint), symbolic (trigger volume)

use glam::DVec2;

use super::aabb::Aabb;

/// Event emitted when a dynamic body overlaps a symbolic body.
///
/// Detection returns these by value so the game layer decides what a trigger
/// means (scene restart, score persistence, ...) and the physics core stays
/// free of game-specific side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The body reached a finish-line volume.
    LevelWon,
    /// The body entered a lose/hazard volume.
    LevelLost,
    /// The body crossed a checkpoint volume.
    Checkpoint,
    /// Game-defined trigger id.
    Custom(u32),
}

/// A simulated body: one live AABB plus the snapshot taken before the current
/// step's integration. The snapshot is the "last known good position" the
/// resolver uses to infer which side a collision came from.
#[derive(Debug, Clone)]
pub struct DynamicBody {
    pub(crate) current: Aabb,
    pub(crate) previous: Aabb,
    pub(crate) velocity: DVec2,
    pub(crate) acceleration: DVec2,
    pub(crate) grounded: bool,
    /// Triggers carried by the body itself; fired ahead of a symbolic body's
    /// own triggers when the two overlap.
    pub(crate) triggers: Vec<TriggerEvent>,
}

impl DynamicBody {
    pub(crate) fn new(aabb: Aabb) -> Self {
        Self {
            current: aabb,
            previous: aabb,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            grounded: false,
            triggers: Vec::new(),
        }
    }

    /// Current bounding box.
    pub fn aabb(&self) -> &Aabb {
        &self.current
    }

    /// Bounding box as it was before this step's integration.
    pub fn previous(&self) -> &Aabb {
        &self.previous
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: DVec2) {
        self.velocity = velocity;
    }

    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: DVec2) {
        self.acceleration = acceleration;
    }

    /// Whether the body's last vertical resolution was a top collision.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Attach a trigger fired whenever this body overlaps a symbolic body.
    pub fn add_trigger(&mut self, event: TriggerEvent) {
        self.triggers.push(event);
    }

    /// Copy the current box into the pre-step snapshot. Called by the
    /// integrator at the top of every fixed step.
    pub(crate) fn snapshot(&mut self) {
        self.previous = self.current;
    }

    /// Visual position for the presentation layer: the midpoint blended
    /// between the last two simulation states. Read-only; never feeds back
    /// into the simulation.
    pub fn interpolated_position(&self, alpha: f64) -> DVec2 {
        self.previous.mid().lerp(self.current.mid(), alpha)
    }
}

/// An immovable solid obstacle.
#[derive(Debug, Clone)]
pub struct StaticBody {
    pub(crate) aabb: Aabb,
}

impl StaticBody {
    pub(crate) fn new(aabb: Aabb) -> Self {
        Self { aabb }
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }
}

/// A non-solid trigger volume. Overlap fires its events in order; it never
/// displaces anything.
#[derive(Debug, Clone)]
pub struct SymbolicBody {
    pub(crate) aabb: Aabb,
    pub(crate) triggers: Vec<TriggerEvent>,
}

impl SymbolicBody {
    pub(crate) fn new(aabb: Aabb, triggers: Vec<TriggerEvent>) -> Self {
        Self { aabb, triggers }
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub fn triggers(&self) -> &[TriggerEvent] {
        &self.triggers
    }
}
