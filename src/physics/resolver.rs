// Contact resolution: push dynamic bodies out of penetration

use glam::DVec2;

use super::aabb::Aabb;
use super::body::DynamicBody;
use super::collision::Contact;
use super::world::World;
use crate::math::slope;

/// Resolve every contact in the given (already sorted) order.
///
/// Each resolution is a positional correction only: the body is displaced
/// out of penetration along one axis and the velocity component on that axis
/// is zeroed. No impulses, no restitution, no friction. Later resolutions
/// may overwrite the displacement of earlier ones; the contact ordering from
/// detection makes the deepest contact win.
pub fn resolve(world: &mut World, contacts: &[Contact]) {
    for contact in contacts {
        let Some(static_body) = world.statics.get(contact.static_body.0) else {
            continue;
        };
        let static_aabb = static_body.aabb;
        let Some(body) = world.dynamics.get_mut(contact.dynamic.0) else {
            continue;
        };
        resolve_contact(body, &static_aabb);
    }
}

/// Push one dynamic body out of one static box.
///
/// Which side the body approached from is inferred from its pre-step
/// snapshot, not its current position: the snapshot is the last position
/// known to be outside the box.
fn resolve_contact(body: &mut DynamicBody, s: &Aabb) {
    let p = body.previous;
    let o = body.current.penetration(s);

    if p.spans_overlap_x(s) && p.bottom() <= s.top() {
        // Came from above: land on the box.
        push_up(body, o.y);
    } else if p.spans_overlap_x(s) && p.top() >= s.bottom() {
        // Came from below: bump the underside.
        push_down(body, o.y);
    } else if p.spans_overlap_y(s) && p.right() <= s.left() {
        push_left(body, o.x);
    } else if p.spans_overlap_y(s) && p.left() >= s.right() {
        push_right(body, o.x);
    } else {
        resolve_corner(body, s, o);
    }
}

/// The diagonal approach: the snapshot was offset from the box on both axes,
/// so neither cardinal test applies. Decide the axis by comparing the slope
/// of the body's motion this step against the slope from its snapshot corner
/// to the opposing corner of the box: motion steeper than the corner line
/// means the body crossed the box's horizontal face first (vertical
/// correction), otherwise it crossed the vertical face (horizontal
/// correction). Ties and degenerate (NaN) motion resolve vertically.
fn resolve_corner(body: &mut DynamicBody, s: &Aabb, o: DVec2) {
    let p = body.previous;

    // The slope comparison only means something when the snapshot was clear
    // of the box on both axes. If one of its spans overlapped the box, the
    // other must too (a single-axis overlap would have satisfied a cardinal
    // test above), so the snapshot was already embedded: a resting or
    // wall-sliding body nudged a few ulps inside, or one spawned inside the
    // box. Push it out along the axis it is least embedded on, vertical on
    // ties. This also covers midpoints exactly colinear with the box's,
    // where the quadrant is undefined.
    if p.spans_overlap_x(s) || p.spans_overlap_y(s) {
        let pm = p.mid();
        let sm = s.mid();
        let depth = p.penetration(s);
        if depth.y <= depth.x {
            if pm.y <= sm.y {
                push_up(body, o.y);
            } else {
                push_down(body, o.y);
            }
        } else if pm.x <= sm.x {
            push_left(body, o.x);
        } else {
            push_right(body, o.x);
        }
        return;
    }

    let pm = p.mid();
    let sm = s.mid();
    // Neither span overlaps, so the midpoints differ on both axes.
    match (pm.y < sm.y, pm.x < sm.x) {
        (true, true) => {
            // Moving down-right toward the box's top-left corner.
            let from = p.bottom_right();
            let motion = slope(from, body.current.bottom_right());
            let toward = slope(from, s.top_left());
            if motion < toward {
                push_left(body, o.x);
            } else {
                push_up(body, o.y);
            }
        }
        (true, false) => {
            // Moving down-left; slopes are negative, steeper descent is smaller.
            let from = p.bottom_left();
            let motion = slope(from, body.current.bottom_left());
            let toward = slope(from, s.top_right());
            if motion > toward {
                push_right(body, o.x);
            } else {
                push_up(body, o.y);
            }
        }
        (false, true) => {
            // Moving up-right; slopes are negative, steeper ascent is smaller.
            let from = p.top_right();
            let motion = slope(from, body.current.top_right());
            let toward = slope(from, s.bottom_left());
            if motion > toward {
                push_left(body, o.x);
            } else {
                push_down(body, o.y);
            }
        }
        (false, false) => {
            // Moving up-left toward the box's bottom-right corner.
            let from = p.top_left();
            let motion = slope(from, body.current.top_left());
            let toward = slope(from, s.bottom_right());
            if motion < toward {
                push_right(body, o.x);
            } else {
                push_down(body, o.y);
            }
        }
    }
}

fn push_up(body: &mut DynamicBody, amount: f64) {
    body.current.translate(DVec2::new(0.0, -amount));
    body.velocity.y = 0.0;
    body.grounded = true;
}

fn push_down(body: &mut DynamicBody, amount: f64) {
    body.current.translate(DVec2::new(0.0, amount));
    body.velocity.y = 0.0;
}

fn push_left(body: &mut DynamicBody, amount: f64) {
    body.current.translate(DVec2::new(-amount, 0.0));
    body.velocity.x = 0.0;
}

fn push_right(body: &mut DynamicBody, amount: f64) {
    body.current.translate(DVec2::new(amount, 0.0));
    body.velocity.x = 0.0;
}
