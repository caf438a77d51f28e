/*!
# Cycle Extractor

Given an edge set known to contain at least one cycle, returns one simple
cycle via an iterative DFS that prefers cheap edges first (§4.6), grounded
in `original_source/src/MinimumMeanCycleCalculator.cpp::find_any_circuit`.

The DFS stack carries `(parent_edge, current_node, next_neighbor_index)`
frames and uses the **parent-edge guard** (skip the edge just arrived on,
by identity, not just "don't revisit the previous node") rather than a
plain "ignore previous node" guard — the resolved open question in
§4.6/§9/DESIGN.md. The previous-node guard is wrong once parallel edges can
appear within a single ∅-join iteration (an edge list is not itself a
simple graph); the parent-edge guard handles that correctly by comparing
edge identity instead of endpoint identity.
*/

use crate::core::types::{CanonicalEdge, EdgeWeight, NodeId};
use std::collections::{HashMap, HashSet};

/// One DFS stack frame: the edge used to arrive at `node`, the node itself,
/// and the index of the next incident edge to try.
struct Frame {
    parent_edge: Option<CanonicalEdge>,
    node: NodeId,
    next_index: usize,
}

/// Finds one simple cycle within `edges`, or `None` if `edges` is acyclic.
///
/// `weight_of` supplies the original graph weight used only to order each
/// node's incident edges cheapest-first — a heuristic for finding a cheap
/// cycle, not a correctness requirement (§4.6).
pub fn find_any_cycle(
    edges: &[(CanonicalEdge, EdgeWeight)],
    weight_of: impl Fn(CanonicalEdge) -> EdgeWeight,
) -> Option<Vec<CanonicalEdge>> {
    let mut adjacency: HashMap<NodeId, Vec<(CanonicalEdge, NodeId)>> = HashMap::new();
    for &(edge, _) in edges {
        adjacency.entry(edge.lo).or_default().push((edge, edge.hi));
        adjacency.entry(edge.hi).or_default().push((edge, edge.lo));
    }
    for incident in adjacency.values_mut() {
        incident.sort_by_key(|(e, _)| weight_of(*e));
    }

    let mut unvisited: Vec<NodeId> = adjacency.keys().copied().collect();
    unvisited.sort_unstable();
    unvisited.reverse(); // pop() takes from the end; keep ascending visitation order

    let mut globally_visited: HashSet<NodeId> = HashSet::new();

    while let Some(root) = unvisited.pop() {
        if globally_visited.contains(&root) {
            continue;
        }
        let mut stack = vec![Frame {
            parent_edge: None,
            node: root,
            next_index: 0,
        }];
        let mut in_stack: HashSet<NodeId> = HashSet::from([root]);
        globally_visited.insert(root);

        while let Some(top) = stack.last_mut() {
            let incident = &adjacency[&top.node];
            if top.next_index >= incident.len() {
                in_stack.remove(&top.node);
                stack.pop();
                continue;
            }
            let (edge, next) = incident[top.next_index];
            top.next_index += 1;
            if Some(edge) == top.parent_edge {
                continue;
            }
            if in_stack.contains(&next) {
                let mut circuit = vec![edge];
                while stack.last().unwrap().node != next {
                    let frame = stack.pop().unwrap();
                    circuit.push(frame.parent_edge.expect(
                        "a frame whose node isn't the cycle-closing target must have a parent edge",
                    ));
                }
                return Some(circuit);
            }
            globally_visited.insert(next);
            in_stack.insert(next);
            stack.push(Frame {
                parent_edge: Some(edge),
                node: next,
                next_index: 0,
            });
        }
    }
    None
}
