// Error types for the physics core

use thiserror::Error;

/// Errors surfaced at construction time.
///
/// The simulation itself has no recoverable-error surface: degenerate float
/// inputs (NaN positions, infinite velocities) degrade gracefully rather than
/// panic. The only thing rejected up front is geometry that would break the
/// AABB invariant.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Box extents must be non-negative; overlap and penetration math
    /// silently produces meaningless results otherwise.
    #[error("box dimensions must be non-negative (got {width} x {height})")]
    NegativeDimensions { width: f64, height: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhysicsError::NegativeDimensions {
            width: -1.0,
            height: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("-1"));
        assert!(msg.contains("non-negative"));
    }
}
