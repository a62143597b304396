// Axis-aligned bounding boxes and the overlap/penetration primitives

use glam::DVec2;

use crate::error::PhysicsError;

/// An axis-aligned rectangle in screen coordinates (y grows downward).
///
/// Extents are fixed at construction; only the min corner moves afterward.
/// Resizing a live box is not supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: DVec2,
    width: f64,
    height: f64,
}

impl Aabb {
    /// Create a box from its min corner (top-left) and extents.
    ///
    /// Fails fast on negative extents: the overlap and penetration math below
    /// assumes non-negative width/height and silently produces meaningless
    /// results otherwise.
    pub fn new(min: DVec2, width: f64, height: f64) -> Result<Self, PhysicsError> {
        if width < 0.0 || height < 0.0 {
            return Err(PhysicsError::NegativeDimensions { width, height });
        }
        Ok(Self { min, width, height })
    }

    /// Min corner (top-left).
    pub fn min(&self) -> DVec2 {
        self.min
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn right(&self) -> f64 {
        self.min.x + self.width
    }

    /// Smaller y edge (screen coordinates).
    pub fn top(&self) -> f64 {
        self.min.y
    }

    pub fn bottom(&self) -> f64 {
        self.min.y + self.height
    }

    /// Center of the box.
    pub fn mid(&self) -> DVec2 {
        self.min + DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn top_left(&self) -> DVec2 {
        self.min
    }

    pub fn top_right(&self) -> DVec2 {
        DVec2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> DVec2 {
        DVec2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> DVec2 {
        DVec2::new(self.right(), self.bottom())
    }

    /// Move the box so its min corner sits at `min`.
    pub fn set_min(&mut self, min: DVec2) {
        self.min = min;
    }

    /// Displace the box by `delta`.
    pub fn translate(&mut self, delta: DVec2) {
        self.min += delta;
    }

    /// Overlap test. Touching edges (exact equality) count as overlapping;
    /// grounded detection depends on a resting body still registering its
    /// floor contact. Written as a positive conjunction so a NaN coordinate
    /// fails every comparison and the box overlaps nothing.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }

    /// Per-axis penetration magnitudes between two boxes.
    ///
    /// Both components are non-negative; the direction of the correction is
    /// inferred separately by the resolver. Only meaningful for pairs already
    /// known to overlap.
    pub fn penetration(&self, other: &Aabb) -> DVec2 {
        let mid_delta = (other.mid() - self.mid()).abs();
        let combined = DVec2::new(
            (self.width + other.width) / 2.0,
            (self.height + other.height) / 2.0,
        );
        (mid_delta - combined).abs()
    }

    /// Inclusive overlap of the horizontal extents only.
    pub(crate) fn spans_overlap_x(&self, other: &Aabb) -> bool {
        self.right() >= other.left() && self.left() <= other.right()
    }

    /// Inclusive overlap of the vertical extents only.
    pub(crate) fn spans_overlap_y(&self, other: &Aabb) -> bool {
        self.bottom() >= other.top() && self.top() <= other.bottom()
    }
}
