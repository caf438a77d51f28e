/*!
# Graph

An undirected, simple, edge-weighted graph over nodes `0..n`. Storage is a
dense row-major adjacency matrix (mirroring the adjacency-matrix layout used
by this solver's reference implementation) so that `edge_exists`/`edge_weight`
are O(1), alongside a sorted vector of canonical edges for O(E) iteration
without rescanning the matrix.
*/

use crate::core::error::{MmcError, Result};
use std::fmt;

/// A node identifier, `0..num_nodes()`.
pub type NodeId = u32;

/// An edge weight. Fits comfortably in `i32`; accumulations use `i64`.
pub type EdgeWeight = i32;

/// An unordered edge canonicalized as `(lo, hi)` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalEdge {
    pub lo: NodeId,
    pub hi: NodeId,
}

impl CanonicalEdge {
    /// Builds a canonical edge from two distinct endpoints, in either order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        debug_assert_ne!(a, b, "self-loops are not representable as edges");
        if a < b {
            CanonicalEdge { lo: a, hi: b }
        } else {
            CanonicalEdge { lo: b, hi: a }
        }
    }

    /// The other endpoint, given one of the two.
    pub fn other(&self, node: NodeId) -> NodeId {
        if node == self.lo {
            self.hi
        } else {
            debug_assert_eq!(node, self.hi);
            self.lo
        }
    }
}

impl fmt::Display for CanonicalEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// Undirected simple graph with O(1) edge lookup by endpoint pair.
///
/// Construction rejects self-loops (§4.1). Parallel edges are the Driver's
/// concern (§6) — by the time a `Graph` exists, at most one weight is stored
/// per unordered pair.
#[derive(Debug, Clone)]
pub struct Graph {
    num_nodes: usize,
    /// Row-major `num_nodes * num_nodes` matrix; `None` where no edge exists.
    /// Both `(u,v)` and `(v,u)` entries are kept so lookups never need to sort
    /// the pair first.
    matrix: Vec<Option<EdgeWeight>>,
    /// Canonical edges in ascending `(lo, hi)` order, kept in lock-step with `matrix`.
    edges: Vec<(CanonicalEdge, EdgeWeight)>,
}

impl Graph {
    /// Creates an empty graph over `num_nodes` nodes with no edges.
    pub fn new(num_nodes: usize) -> Self {
        Graph {
            num_nodes,
            matrix: vec![None; num_nodes * num_nodes],
            edges: Vec::new(),
        }
    }

    /// Number of nodes, i.e. the valid node-id range is `0..num_nodes()`.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of distinct edges currently stored.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn index(&self, u: NodeId, v: NodeId) -> usize {
        u as usize * self.num_nodes + v as usize
    }

    /// Inserts an edge `{u, v}` with the given weight.
    ///
    /// Returns `Err(MmcError::InputFormat)` on a self-loop. If an edge between
    /// `u` and `v` already exists, its weight is overwritten in place (the
    /// Driver is responsible for deciding *whether* that should happen —
    /// rejecting or collapsing parallel edges — before calling this).
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: EdgeWeight) -> Result<()> {
        if u == v {
            return Err(MmcError::input_format(format!(
                "self-loop at node {} is not allowed",
                u
            )));
        }
        let canon = CanonicalEdge::new(u, v);
        let iuv = self.index(u, v);
        let ivu = self.index(v, u);
        let replaced = self.matrix[iuv].is_some();
        self.matrix[iuv] = Some(weight);
        self.matrix[ivu] = Some(weight);
        if replaced {
            if let Some(slot) = self.edges.iter_mut().find(|(e, _)| *e == canon) {
                slot.1 = weight;
            }
        } else {
            let pos = self.edges.partition_point(|(e, _)| *e < canon);
            self.edges.insert(pos, (canon, weight));
        }
        Ok(())
    }

    /// O(1): does an edge between `u` and `v` exist?
    pub fn edge_exists(&self, u: NodeId, v: NodeId) -> bool {
        if u as usize >= self.num_nodes || v as usize >= self.num_nodes || u == v {
            return false;
        }
        self.matrix[self.index(u, v)].is_some()
    }

    /// O(1): the weight of the edge `{u, v}`.
    ///
    /// Precondition: `edge_exists(u, v)`; panics otherwise, matching the
    /// spec's "precondition: edge exists" contract for this accessor.
    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> EdgeWeight {
        self.matrix[self.index(u, v)].expect("edge_weight called on a non-existent edge")
    }

    /// Iterates all existing edges as canonical `(lo, hi, weight)` triples,
    /// in ascending `(lo, hi)` order.
    pub fn edges(&self) -> impl Iterator<Item = (CanonicalEdge, EdgeWeight)> + '_ {
        self.edges.iter().copied()
    }

    /// Neighbors of `node`, ascending by node id (Dijkstra's relaxation loop
    /// requires this order for deterministic, reproducible results).
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let base = node as usize * self.num_nodes;
        (0..self.num_nodes).filter_map(move |v| self.matrix[base + v].map(|_| v as NodeId))
    }
}
