/*!
# Shortest Paths (Dijkstra)

Single-source shortest paths under a caller-supplied non-negative edge-cost
function (§4.2), grounded in `original_source/src/ShortestPathCalculator.cpp`.
The priority queue is `core::queue::MinPriorityQueue`; staleness (an entry
popped for a node whose distance has since improved, or that is already
fixed) is filtered by comparing the popped distance against the recorded one.

Unlike the teacher's generic `dijkstra_path_impl` (which ran over a
`petgraph`-backed `BaseGraph<A, W, Ty>` and produced a whole-graph distance
map), this version is built directly against `core::types::Graph` and
specializes two things the T-join solver actually needs: early termination
once a target set is fully labeled, and reconstruction of a single path's
edge list rather than a distance map.
*/

use crate::core::queue::MinPriorityQueue;
use crate::core::types::{CanonicalEdge, EdgeWeight, Graph, NodeId};

/// A shortest path found by [`ShortestPaths`]: its edges, canonicalized and
/// ordered source-to-target, and its total transformed cost.
#[derive(Debug, Clone)]
pub struct Path {
    pub edges: Vec<CanonicalEdge>,
    pub cost: i64,
}

/// Per-node Dijkstra bookkeeping.
#[derive(Debug, Clone, Copy)]
struct NodeData {
    distance: i64,
    parent: Option<NodeId>,
    fixed: bool,
}

/// Runs (and owns the state of) a single Dijkstra computation from one
/// source, under a caller-supplied non-negative cost transform.
///
/// The caller must guarantee `cost(w(e)) >= 0` for every edge; violating
/// this is a contract error and is asserted in debug builds (§4.2, §7).
pub struct ShortestPaths {
    source: NodeId,
    node_data: Vec<NodeData>,
}

impl ShortestPaths {
    /// Runs Dijkstra from `source` until every node in `targets` has been
    /// fixed, or the whole reachable component has been exhausted.
    pub fn run_until_found(
        graph: &Graph,
        source: NodeId,
        cost: impl Fn(EdgeWeight) -> i64,
        targets: &[NodeId],
    ) -> Self {
        let n = graph.num_nodes();
        let mut node_data = vec![
            NodeData {
                distance: i64::MAX,
                parent: None,
                fixed: false,
            };
            n
        ];
        node_data[source as usize].distance = 0;

        let mut heap: MinPriorityQueue<i64, NodeId> = MinPriorityQueue::new();
        heap.push(0, source);

        let mut remaining: usize = targets.iter().filter(|&&t| t != source).count();

        while remaining > 0 {
            let Some((dist, u)) = heap.pop_min() else {
                break;
            };
            let u_idx = u as usize;
            if node_data[u_idx].fixed || dist != node_data[u_idx].distance {
                continue; // stale entry
            }
            node_data[u_idx].fixed = true;
            if targets.contains(&u) {
                remaining -= 1;
            }

            // Ascending node id for reproducibility (§4.2).
            for v in graph.neighbors(u) {
                if node_data[v as usize].fixed {
                    continue;
                }
                let edge_cost = cost(graph.edge_weight(u, v));
                debug_assert!(
                    edge_cost >= 0,
                    "Dijkstra requires a non-negative cost transform, got {} for edge {}-{}",
                    edge_cost,
                    u,
                    v
                );
                let candidate = node_data[u_idx].distance + edge_cost;
                if candidate < node_data[v as usize].distance {
                    node_data[v as usize].distance = candidate;
                    node_data[v as usize].parent = Some(u);
                    heap.push(candidate, v);
                }
            }
        }

        ShortestPaths {
            source,
            node_data,
        }
    }

    /// Reconstructs the shortest path found to `target`, or `None` if
    /// `target` was never reached (a valid result, not an error — §4.2).
    pub fn path_to(&self, target: NodeId) -> Option<Path> {
        let data = self.node_data[target as usize];
        if data.parent.is_none() && target != self.source {
            return None;
        }
        if target == self.source {
            return Some(Path {
                edges: Vec::new(),
                cost: 0,
            });
        }

        let mut edges = Vec::new();
        let mut current = target;
        while current != self.source {
            let parent = self.node_data[current as usize].parent?;
            edges.push(CanonicalEdge::new(parent, current));
            current = parent;
        }
        edges.reverse();
        Some(Path {
            edges,
            cost: data.distance,
        })
    }

    pub fn distance_to(&self, target: NodeId) -> Option<i64> {
        let data = self.node_data[target as usize];
        if target == self.source {
            Some(0)
        } else if data.parent.is_some() {
            Some(data.distance)
        } else {
            None
        }
    }
}
