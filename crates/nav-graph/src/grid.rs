//! Jittered-grid waypoint generator.
//!
//! Produces the node positions and edge pairs for a `width × height` grid
//! of waypoints with 4-directional bidirectional connectivity:
//!
//! ```text
//! +<--->+<--->+
//! ^     ^     ^
//! |     |     |
//! v     v     v
//! +<--->+<--->+
//! ```
//!
//! Each node sits at its grid position plus a random planar jitter, with its
//! height supplied by a caller-provided terrain callback.  Feed the output
//! straight into [`NavGraph::from_positions_and_edges`][crate::NavGraph::from_positions_and_edges].

use nav_core::Vec3;
use rand::Rng;

/// Parameters for [`jittered_grid`].
#[derive(Debug, Clone)]
pub struct GridSpec {
    /// Nodes along the x axis.
    pub width: u32,
    /// Nodes along the z axis.
    pub height: u32,
    /// Distance between neighbouring grid positions.
    pub spacing: f32,
    /// Maximum planar offset applied to each node, per axis.
    pub jitter: f32,
    /// Added to every node's terrain height, lifting waypoints off the ground.
    pub y_offset: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            spacing: 10.0,
            jitter: 4.0,
            y_offset: 0.5,
        }
    }
}

/// Generate jittered grid positions and 4-directional edge pairs.
///
/// `terrain_height` maps an `(x, z)` ground position to its height; pass
/// `|_, _| 0.0` for a flat world.  Jitter is sampled from `rng`, so a seeded
/// RNG reproduces the same layout.
///
/// The node at grid cell `(x, z)` has index `z * width + x`.  Every
/// interior link appears twice in the edge list, once per direction.
pub fn jittered_grid<R: Rng>(
    spec: &GridSpec,
    terrain_height: impl Fn(f32, f32) -> f32,
    rng: &mut R,
) -> (Vec<Vec3>, Vec<(u32, u32)>) {
    let (w, h) = (spec.width, spec.height);
    let mut positions = Vec::with_capacity((w * h) as usize);

    for z in 0..h {
        for x in 0..w {
            let jx = spec.spacing * (x + 1) as f32 + rng.gen_range(-1.0..=1.0) * spec.jitter;
            let jz = spec.spacing * (z + 1) as f32 + rng.gen_range(-1.0..=1.0) * spec.jitter;
            let y = terrain_height(jx, jz) + spec.y_offset;
            positions.push(Vec3::new(jx, y, jz));
        }
    }

    // Right and down neighbours, both directions each.
    let mut edges = Vec::with_capacity(2 * (2 * (w * h)).saturating_sub(w + h) as usize);
    for z in 0..h {
        for x in 0..w {
            let here = z * w + x;
            if x + 1 < w {
                let right = here + 1;
                edges.push((here, right));
                edges.push((right, here));
            }
            if z + 1 < h {
                let below = here + w;
                edges.push((here, below));
                edges.push((below, here));
            }
        }
    }

    (positions, edges)
}
