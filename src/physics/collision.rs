// Collision detection: overlap tests, contact ordering, trigger collection

use super::body::TriggerEvent;
use super::world::{DynamicBodyHandle, StaticBodyHandle, World};

/// A single dynamic-vs-static overlap found this step.
///
/// Contacts are transient: the list is rebuilt and fully drained every fixed
/// step, nothing is carried across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub dynamic: DynamicBodyHandle,
    pub static_body: StaticBodyHandle,
    /// Product of the per-axis penetration magnitudes.
    pub overlap_area: f64,
}

/// Test every dynamic body against every static and symbolic body.
///
/// Detection is pure with respect to positions and velocities; the only
/// mutation is resetting each dynamic body's grounded flag, which the
/// resolver re-establishes for bodies still standing on something.
///
/// Contacts come back sorted by overlap area ascending: the shallowest
/// contact is resolved first so that when one body touches several static
/// boxes in the same step, the deepest interpenetration is corrected last
/// and wins any conflicting correction. The sort is stable, so ties keep
/// discovery order (dynamic-major, then static-minor).
pub fn detect(world: &mut World) -> (Vec<Contact>, Vec<TriggerEvent>) {
    for body in &mut world.dynamics {
        body.grounded = false;
    }

    let mut contacts = Vec::new();
    let mut events = Vec::new();

    for (di, dynamic) in world.dynamics.iter().enumerate() {
        for (si, static_body) in world.statics.iter().enumerate() {
            if dynamic.current.overlaps(&static_body.aabb) {
                let pen = dynamic.current.penetration(&static_body.aabb);
                contacts.push(Contact {
                    dynamic: DynamicBodyHandle(di),
                    static_body: StaticBodyHandle(si),
                    overlap_area: pen.x * pen.y,
                });
            }
        }

        for symbolic in &world.symbolics {
            if dynamic.current.overlaps(&symbolic.aabb) {
                events.extend_from_slice(&dynamic.triggers);
                events.extend_from_slice(&symbolic.triggers);
            }
        }
    }

    // total_cmp keeps the sort stable and total even if a degenerate body
    // produced a NaN area.
    contacts.sort_by(|a, b| a.overlap_area.total_cmp(&b.overlap_area));

    (contacts, events)
}
