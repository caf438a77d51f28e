/*!
# Minimum T-Join Solver

The Edmonds–Johnson reduction (§4.3), grounded in
`original_source/src/TJoinCalculator.cpp`: given a base graph and the
current γ's reweighting transform, computes a minimum-cost **∅-join** — an
edge set with even degree everywhere, i.e. a disjoint union of cycles whose
total transformed cost is `<= 0`.

The reduction in three steps:
1. Split edges by the sign of their transformed cost into `N` (negative)
   and the rest; `T` is the set of nodes with odd negative-edge degree.
2. Solve a minimum-cost T-join for `T` under `|transformed cost|` (always
   non-negative, so Dijkstra applies) via all-pairs shortest paths between
   `T` members, reduced to a perfect matching on the complete graph over `T`.
3. Return `N △ J*`, the sorted symmetric difference.
*/

use crate::core::error::Result;
use crate::core::gamma::Gamma;
use crate::core::matching::{minimum_weight_perfect_matching, MatchingEdge};
use crate::core::paths::ShortestPaths;
use crate::core::types::{CanonicalEdge, Graph, NodeId};
use std::collections::HashMap;

/// Computes the minimum ∅-join of `graph` under the cost transform
/// `w -> gamma.apply(w)` (§4.3). The result is sorted by canonical `(lo,hi)`.
pub fn minimum_zero_join(graph: &Graph, gamma: &Gamma) -> Result<Vec<CanonicalEdge>> {
    let mut node_is_odd = vec![false; graph.num_nodes()];
    let mut negative_edges = Vec::new();

    for (edge, w) in graph.edges() {
        if gamma.apply(w) < 0 {
            node_is_odd[edge.lo as usize] = !node_is_odd[edge.lo as usize];
            node_is_odd[edge.hi as usize] = !node_is_odd[edge.hi as usize];
            negative_edges.push(edge);
        }
    }
    // `graph.edges()` already yields ascending (lo,hi), so this is already sorted.
    debug_assert!(negative_edges.windows(2).all(|w| w[0] < w[1]));

    let odd_nodes: Vec<NodeId> = (0..graph.num_nodes() as NodeId)
        .filter(|&n| node_is_odd[n as usize])
        .collect();

    let mut base_result = minimum_cost_t_join_nonnegative(graph, gamma, &odd_nodes)?;
    base_result.sort();

    Ok(symmetric_difference(&negative_edges, &base_result))
}

/// Step 2 of the reduction: minimum-cost T-join for `odd_nodes` under the
/// non-negative cost `|gamma.apply(w)|` (§4.3 "Minimum T-join under
/// non-negative costs").
fn minimum_cost_t_join_nonnegative(
    graph: &Graph,
    gamma: &Gamma,
    odd_nodes: &[NodeId],
) -> Result<Vec<CanonicalEdge>> {
    if odd_nodes.is_empty() {
        return Ok(Vec::new());
    }

    let abs_cost = |w| gamma.apply(w).abs();

    // paths[(lower, higher)] holds the shortest path between odd_nodes[lower]
    // and odd_nodes[higher] for lower < higher.
    let mut paths: HashMap<(usize, usize), Vec<CanonicalEdge>> = HashMap::new();
    let mut matching_edges = Vec::new();

    for lower in 0..odd_nodes.len() {
        let remaining_targets = &odd_nodes[lower + 1..];
        let sp = ShortestPaths::run_until_found(graph, odd_nodes[lower], abs_cost, remaining_targets);
        for (offset, &target) in remaining_targets.iter().enumerate() {
            let higher = lower + 1 + offset;
            if let Some(path) = sp.path_to(target) {
                matching_edges.push(MatchingEdge {
                    i: lower,
                    j: higher,
                    cost: path.cost,
                });
                paths.insert((lower, higher), path.edges);
            }
            // No path: this pair is simply omitted from the auxiliary graph
            // (§4.3) — if that makes a perfect matching impossible, the
            // matching solver below surfaces `MatchingInfeasible`.
        }
    }

    let partner = minimum_weight_perfect_matching(odd_nodes.len(), &matching_edges)?;

    let mut result = Vec::new();
    for (index, &matched_to) in partner.iter().enumerate() {
        if matched_to < index {
            if let Some(path_edges) = paths.get(&(matched_to, index)) {
                result.extend_from_slice(path_edges);
            }
        }
    }

    Ok(cancel_duplicate_pairs(result))
}

/// Sorts `edges` and drops any pair of consecutive equal entries (§4.3,
/// §9 "duplicate-edge cancellation"): an edge used by two matched paths
/// contributes zero net parity change and must not survive into `J*`.
fn cancel_duplicate_pairs(mut edges: Vec<CanonicalEdge>) -> Vec<CanonicalEdge> {
    edges.sort();
    let mut result = Vec::with_capacity(edges.len());
    let mut i = 0;
    while i < edges.len() {
        if i + 1 < edges.len() && edges[i] == edges[i + 1] {
            i += 2;
        } else {
            result.push(edges[i]);
            i += 1;
        }
    }
    result
}

/// Sorted symmetric difference of two sorted, strictly-increasing edge lists
/// (§3, §9): `A △ B`, computed in one linear pass.
fn symmetric_difference(a: &[CanonicalEdge], b: &[CanonicalEdge]) -> Vec<CanonicalEdge> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                result.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                result.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);
    result
}
