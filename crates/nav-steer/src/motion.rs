//! The three-zone steering law.

use nav_core::Vec3;

/// Snap radius for direct movement at the final goal position.
pub const SNAP_RADIUS_DIRECT: f32 = 0.1;

/// Snap radius while consuming path waypoints.
///
/// Deliberately much coarser than [`SNAP_RADIUS_DIRECT`]: waypoints only
/// shape the route, the final target is the position that matters.  The two
/// radii are distinct constants on purpose; do not unify them.
pub const SNAP_RADIUS_PATH: f32 = 2.0;

/// Tuning for the steering law.  The defaults are the canonical values used
/// throughout the framework.
#[derive(Debug, Clone)]
pub struct SteeringParams {
    /// Step length per tick in the constant-speed zone.
    pub speed: f32,
    /// Inside this distance the agent decelerates toward the target.
    pub ease_radius: f32,
    /// Fraction of the remaining distance covered per tick while easing.
    pub ease_factor: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            speed: 0.1,
            ease_radius: 6.0,
            ease_factor: 0.1,
        }
    }
}

/// Result of one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The agent's new position.
    pub position: Vec3,
    /// `true` when the agent landed exactly on the sub-target (snap zone).
    pub arrived: bool,
}

/// Advance `position` one tick toward `target`.
///
/// The uniform movement law used for both direct-to-goal motion and
/// path-following motion; callers select the context by passing the
/// appropriate snap radius.
pub fn step_toward(position: Vec3, target: Vec3, snap_radius: f32, params: &SteeringParams) -> Step {
    let distance = position.distance(target);

    if distance < snap_radius {
        // Close enough to land exactly on the target.
        return Step {
            position: target,
            arrived: true,
        };
    }

    let direction = (target - position) / distance;
    let step = if distance < params.ease_radius {
        // Ease into the target.
        params.speed.min(params.ease_factor * distance)
    } else {
        // Constant speed toward the target.
        params.speed
    };

    Step {
        position: position + step * direction,
        arrived: false,
    }
}
