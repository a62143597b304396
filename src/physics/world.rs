// World registry owning all live bodies

use glam::DVec2;

use super::aabb::Aabb;
use super::body::{DynamicBody, StaticBody, SymbolicBody, TriggerEvent};
use crate::error::PhysicsError;

/// Handle to a dynamic body. Valid until the next [`World::purge_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynamicBodyHandle(pub(crate) usize);

/// Handle to a static body. Valid until the next [`World::purge_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticBodyHandle(pub(crate) usize);

/// Handle to a symbolic body. Valid until the next [`World::purge_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicBodyHandle(pub(crate) usize);

/// Registry of all live bodies, split into three homogeneous collections so
/// detection never inspects a body's kind at runtime.
///
/// Collections are append-only: scene construction adds bodies, scene
/// teardown purges everything. There is no per-body removal. Insertion order
/// is the iteration order used by detection.
#[derive(Debug, Default)]
pub struct World {
    pub(crate) dynamics: Vec<DynamicBody>,
    pub(crate) statics: Vec<StaticBody>,
    pub(crate) symbolics: Vec<SymbolicBody>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a simulated body. Fails on negative extents.
    pub fn create_dynamic_body(
        &mut self,
        min: DVec2,
        width: f64,
        height: f64,
    ) -> Result<DynamicBodyHandle, PhysicsError> {
        let aabb = Aabb::new(min, width, height)?;
        self.dynamics.push(DynamicBody::new(aabb));
        Ok(DynamicBodyHandle(self.dynamics.len() - 1))
    }

    /// Register an immovable solid obstacle. Fails on negative extents.
    pub fn create_static_body(
        &mut self,
        min: DVec2,
        width: f64,
        height: f64,
    ) -> Result<StaticBodyHandle, PhysicsError> {
        let aabb = Aabb::new(min, width, height)?;
        self.statics.push(StaticBody::new(aabb));
        Ok(StaticBodyHandle(self.statics.len() - 1))
    }

    /// Register a non-solid trigger volume. Fails on negative extents.
    pub fn create_symbolic_body(
        &mut self,
        min: DVec2,
        width: f64,
        height: f64,
        triggers: Vec<TriggerEvent>,
    ) -> Result<SymbolicBodyHandle, PhysicsError> {
        let aabb = Aabb::new(min, width, height)?;
        self.symbolics.push(SymbolicBody::new(aabb, triggers));
        Ok(SymbolicBodyHandle(self.symbolics.len() - 1))
    }

    /// Drop every body. Called on scene teardown; all outstanding handles
    /// become invalid. Pair with [`StepScheduler::reset`] when reloading.
    ///
    /// [`StepScheduler::reset`]: super::scheduler::StepScheduler::reset
    pub fn purge_all(&mut self) {
        log::info!(
            "purging world: {} dynamic, {} static, {} symbolic bodies",
            self.dynamics.len(),
            self.statics.len(),
            self.symbolics.len()
        );
        self.dynamics.clear();
        self.statics.clear();
        self.symbolics.clear();
    }

    /// Get a reference to a dynamic body.
    pub fn dynamic(&self, handle: DynamicBodyHandle) -> Option<&DynamicBody> {
        self.dynamics.get(handle.0)
    }

    /// Get a mutable reference to a dynamic body.
    pub fn dynamic_mut(&mut self, handle: DynamicBodyHandle) -> Option<&mut DynamicBody> {
        self.dynamics.get_mut(handle.0)
    }

    /// Get a reference to a static body.
    pub fn static_body(&self, handle: StaticBodyHandle) -> Option<&StaticBody> {
        self.statics.get(handle.0)
    }

    /// Get a reference to a symbolic body.
    pub fn symbolic(&self, handle: SymbolicBodyHandle) -> Option<&SymbolicBody> {
        self.symbolics.get(handle.0)
    }

    /// Whether a dynamic body is resting on a surface.
    pub fn grounded(&self, handle: DynamicBodyHandle) -> bool {
        self.dynamic(handle).map_or(false, DynamicBody::grounded)
    }

    /// Visual position of a dynamic body, blended between its last two
    /// simulation states by the scheduler's interpolation alpha.
    pub fn interpolated_position(&self, handle: DynamicBodyHandle, alpha: f64) -> Option<DVec2> {
        self.dynamic(handle)
            .map(|body| body.interpolated_position(alpha))
    }

    pub fn dynamic_count(&self) -> usize {
        self.dynamics.len()
    }

    pub fn static_count(&self) -> usize {
        self.statics.len()
    }

    pub fn symbolic_count(&self) -> usize {
        self.symbolics.len()
    }
}
