//! Waypoint graph representation and builder.
//!
//! # Data layout
//!
//! Each [`Node`] owns the ordered list of its outgoing [`Edge`]s, so a
//! node's neighbourhood is one contiguous `Vec` scan — the shape the A*
//! inner loop wants.  Edge cost is the Euclidean distance between the two
//! endpoint positions, computed once at build time.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the 3-D node positions answers
//! nearest-node queries.  Used every time an agent position or a goal
//! target has to be snapped onto the graph.

use nav_core::{NodeId, Vec3, approx_eq};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 3-D point with the associated
/// `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 3],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 3]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed, weighted link between two graph nodes.
///
/// Cost is the Euclidean distance between the endpoint positions and is
/// therefore always non-negative.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f32,
}

impl PartialEq for Edge {
    /// Equal when both endpoints match and the costs are approximately equal.
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && approx_eq(self.cost, other.cost)
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// A waypoint: a 3-D position plus the ordered list of outgoing edges.
///
/// Nodes are created once when the graph is built and never mutated
/// afterwards.  `debug_id` equals the node's index in the build input and is
/// carried for diagnostics output only.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub position: Vec3,
    pub edges: Vec<Edge>,
    pub debug_id: usize,
}

// ── NavGraph ──────────────────────────────────────────────────────────────────

/// The navigation graph: owned node storage plus a nearest-node index.
///
/// Built once via [`NavGraphBuilder`] (or the
/// [`from_positions_and_edges`][NavGraph::from_positions_and_edges]
/// convenience) and read-only during simulation.  `NodeId`s index directly
/// into the node vector and remain valid for the graph's lifetime.
pub struct NavGraph {
    nodes: Vec<Node>,
    edge_count: usize,
    spatial_idx: RTree<NodeEntry>,
}

impl NavGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any nearest-node query against it returns `None`; useful as a
    /// placeholder when no navigation is needed.
    pub fn empty() -> Self {
        NavGraphBuilder::new().build()
    }

    /// Build a graph from node positions and `(from, to)` index pairs.
    ///
    /// Node identity is the position's index in `positions`.  Each pair adds
    /// one directed edge owned by `from`, with cost equal to the Euclidean
    /// distance between the endpoints.
    ///
    /// # Panics
    ///
    /// Panics if any edge index is out of bounds — that is a construction
    /// bug in the caller, not a recoverable condition.
    pub fn from_positions_and_edges(positions: &[Vec3], edge_pairs: &[(u32, u32)]) -> Self {
        let mut b = NavGraphBuilder::with_capacity(positions.len(), edge_pairs.len());
        for &p in positions {
            b.add_node(p);
        }
        for &(from, to) in edge_pairs {
            b.add_edge(NodeId(from), NodeId(to));
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The node with the given id.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-bounds id.  Ids come from this graph's own build
    /// input or its queries, so a bad id is a caller bug.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Position of the node with the given id.
    #[inline]
    pub fn position(&self, id: NodeId) -> Vec3 {
        self.nodes[id.index()].position
    }

    /// Iterator over all `NodeId`s in ascending index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node closest to `point` by Euclidean distance.
    ///
    /// Returns `None` only when the graph has no nodes.
    pub fn closest_node(&self, point: Vec3) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[point.x, point.y, point.z])
            .map(|e| e.id)
    }
}

// ── NavGraphBuilder ───────────────────────────────────────────────────────────

/// Construct a [`NavGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order; edge indices
/// are validated and costs computed when `build()` runs.
///
/// # Example
///
/// ```
/// use nav_core::Vec3;
/// use nav_graph::NavGraphBuilder;
///
/// let mut b = NavGraphBuilder::new();
/// let a = b.add_node(Vec3::new(0.0, 0.0, 0.0));
/// let c = b.add_node(Vec3::new(3.0, 0.0, 4.0));
/// b.add_link(a, c); // both directions
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.node(a).edges[0].cost, 5.0);
/// ```
pub struct NavGraphBuilder {
    positions: Vec<Vec3>,
    edge_pairs: Vec<(NodeId, NodeId)>,
}

impl NavGraphBuilder {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            edge_pairs: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            positions: Vec::with_capacity(nodes),
            edge_pairs: Vec::with_capacity(edges),
        }
    }

    /// Add a waypoint and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, position: Vec3) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(position);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edge_pairs.push((from, to));
    }

    /// Convenience: add edges in **both directions** between `a` and `b`.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_pairs.len()
    }

    /// Consume the builder and produce a [`NavGraph`].
    ///
    /// Computes edge costs, attaches each edge to its source node in
    /// insertion order, and bulk-loads the R-tree.
    ///
    /// # Panics
    ///
    /// Panics if any recorded edge references a node index that was never
    /// added.
    pub fn build(self) -> NavGraph {
        let node_count = self.positions.len();

        let mut nodes: Vec<Node> = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, &position)| Node {
                position,
                edges: Vec::new(),
                debug_id: i,
            })
            .collect();

        let edge_count = self.edge_pairs.len();
        for (from, to) in self.edge_pairs {
            assert!(
                from.index() < node_count && to.index() < node_count,
                "edge ({from}, {to}) references a node outside 0..{node_count}",
            );
            let cost = self.positions[from.index()].distance(self.positions[to.index()]);
            nodes[from.index()].edges.push(Edge { from, to, cost });
        }

        // Bulk-load is O(N log N) — faster than N individual inserts.
        let entries: Vec<NodeEntry> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| NodeEntry {
                point: [n.position.x, n.position.y, n.position.z],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        NavGraph {
            nodes,
            edge_count,
            spatial_idx,
        }
    }
}

impl Default for NavGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
