//! Math re-exports and float comparison helpers.
//!
//! All spatial quantities in the framework are single-precision `glam`
//! types: positions and directions are [`Vec3`], orientations are [`Quat`].
//! Re-exporting them here keeps every other `nav-*` crate on the same glam
//! version without naming it in their manifests.

pub use glam::{Quat, Vec3};

/// Relative-epsilon float equality.
///
/// Scales the tolerance with the larger magnitude so it behaves sensibly for
/// both unit-scale steering distances and large world coordinates.  Edge
/// equality in `nav-graph` is defined in terms of this.
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 1e-5;
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}
